use super::error::{PdfError, Result};
use crate::core::config::PdfiumConfig;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// Set by the build script when the `bundled-pdfium` feature downloaded a library.
const BUNDLED_PDFIUM_DIR: Option<&str> = option_env!("DOC2KG_BUNDLED_PDFIUM_DIR");

/// An explicitly owned handle onto the pdfium library.
///
/// Binding happens once, in [`PdfBackend::new`], and the handle is then passed by
/// reference into every extraction call. Documents opened through it borrow the
/// backend and are closed when they go out of scope, including on error paths.
///
/// Binding order:
///
/// 1. `PdfiumConfig::library_dir`, when set, is searched for the platform
///    library name (`libpdfium.so`, `libpdfium.dylib`, `pdfium.dll`).
/// 2. Otherwise, in builds with the `bundled-pdfium` feature, the library
///    downloaded at build time.
/// 3. Otherwise the system library search path is used.
pub struct PdfBackend {
    pdfium: Pdfium,
}

impl PdfBackend {
    pub fn new(config: &PdfiumConfig) -> Result<Self> {
        let bindings = match library_dir(config) {
            Some(lib_dir) => {
                tracing::debug!("Binding pdfium from {}", lib_dir.display());
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&lib_dir))
            }
            None => {
                tracing::debug!("Binding system pdfium library");
                Pdfium::bind_to_system_library()
            }
        }
        .map_err(|e| PdfError::LibraryUnavailable(format!("Failed to initialize Pdfium: {}", e)))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Open a PDF file. The returned document borrows the backend.
    pub fn open(&self, path: &Path) -> Result<PdfDocument<'_>> {
        self.pdfium.load_pdf_from_file(path, None).map_err(map_load_error)
    }
}

fn library_dir(config: &PdfiumConfig) -> Option<PathBuf> {
    config
        .library_dir
        .clone()
        .or_else(|| BUNDLED_PDFIUM_DIR.map(PathBuf::from))
}

fn map_load_error(err: PdfiumError) -> PdfError {
    let err_msg = err.to_string();
    if err_msg.contains("password") || err_msg.contains("Password") {
        PdfError::PasswordRequired
    } else {
        PdfError::InvalidPdf(err_msg)
    }
}
