//! PDF document processing utilities.
//!
//! Low-level page operations on top of `pdfium-render`, used by the
//! operations in [`crate::core::extractor`].
//!
//! - **Backend**: explicit pdfium binding ([`PdfBackend`])
//! - **Text**: full-page text, header/footer-cropped text
//! - **Regions**: ratio regions resolved against the crop box
//! - **Rendering**: page rasterization at a target DPI
//!
//! # Example
//!
//! ```rust,no_run
//! use doc2kg::core::config::PdfiumConfig;
//! use doc2kg::pdf::{PdfBackend, extract_text_from_pdf_document};
//! use std::path::Path;
//!
//! # fn example() -> doc2kg::Result<()> {
//! let backend = PdfBackend::new(&PdfiumConfig::default())?;
//! let document = backend.open(Path::new("document.pdf"))?;
//! let pages = extract_text_from_pdf_document(&document)?;
//! println!("{} pages", pages.len());
//! # Ok(())
//! # }
//! ```
pub mod bindings;
pub mod error;
pub mod geometry;
pub mod regions;
pub mod rendering;
pub mod text;

pub use bindings::PdfBackend;
pub use error::PdfError;
pub use geometry::{PageRect, Region};
pub use regions::{RegionMap, extract_region_text_from_pdf_document};
pub use rendering::{PageRenderOptions, render_page_to_image};
pub use text::{
    DEFAULT_BAND_RATIO, extract_body_text_from_pdf_document, extract_page_text, extract_text_from_pdf_document,
};
