//! doc2kg - PDF extraction for the document-to-knowledge-graph pipeline.
//!
//! Four independent operations, each a single pass over a PDF:
//!
//! - [`extract_text`]: all page text, whitespace collapsed to one line
//! - [`extract_text_sentences`]: body text without running headers/footers,
//!   re-segmented into one sentence per paragraph
//! - [`extract_text_regions`]: text inside normalized page regions, line breaks kept
//! - [`extract_images`]: every page rendered to `{doc_id}.{page}.png`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use doc2kg::{ExtractionConfig, PdfBackend, extract_text};
//!
//! # fn main() -> doc2kg::Result<()> {
//! let config = ExtractionConfig::default();
//! let backend = PdfBackend::new(&config.pdfium)?;
//! let result = extract_text(&backend, "document.pdf")?;
//! println!("{} pages: {}", result.pages, result.text);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod pdf;
pub mod text;
pub mod types;

pub use error::{Doc2kgError, ErrorKind, Result};
pub use types::*;

pub use core::config::{ExtractionConfig, HeaderFooterConfig, PdfiumConfig, SentenceConfig};
pub use core::extractor::{
    extract_images, extract_text, extract_text_regions, extract_text_regions_json, extract_text_sentences,
};
pub use pdf::{PageRenderOptions, PdfBackend, Region, RegionMap};
pub use text::SentenceModel;
