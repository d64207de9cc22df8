//! Core extraction layer.
//!
//! - **Entry points** (`extractor`): the text, sentence, region and image operations
//! - **Configuration** (`config`): TOML/JSON loading and `doc2kg.toml` discovery
//! - **I/O** (`io`): input validation and output directory creation

pub mod config;
pub mod extractor;
pub mod io;

pub use config::{ExtractionConfig, HeaderFooterConfig, PdfiumConfig, SentenceConfig};
pub use extractor::{
    extract_images, extract_text, extract_text_regions, extract_text_regions_json, extract_text_sentences,
};
