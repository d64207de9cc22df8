//! Error types for doc2kg.
//!
//! Every operation returns `Result<T, Doc2kgError>`. The command-line boundary
//! turns an error into `{"success": false, "error": ...}`, so the `Display`
//! string of each variant is the message callers see.
//!
//! Errors are grouped into a small set of abstract kinds (see [`ErrorKind`])
//! so that callers can branch on the category without parsing messages:
//!
//! - `Io` - missing files, permission problems, failed writes
//! - `Parse` - corrupt PDFs, malformed region JSON, invalid configuration
//! - `ResourceMissing` - pdfium library or sentence model not installed
//! - `Render` - page rasterization or image encoding failures
//!
//! # Example
//!
//! ```rust
//! use doc2kg::{Doc2kgError, ErrorKind, Result};
//!
//! fn read_regions(path: &str) -> Result<String> {
//!     // IO errors bubble up automatically via ?
//!     let content = std::fs::read_to_string(path)?;
//!     if content.trim().is_empty() {
//!         return Err(Doc2kgError::parsing(format!("Region file is empty: {}", path)));
//!     }
//!     Ok(content)
//! }
//!
//! let err = read_regions("/definitely/not/here.json").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Io);
//! ```
use crate::pdf::error::PdfError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias using `Doc2kgError`.
pub type Result<T> = std::result::Result<T, Doc2kgError>;

/// Abstract error category reported alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Io,
    Parse,
    ResourceMissing,
    Render,
}

/// Main error type for all doc2kg operations.
#[derive(Debug, Error)]
pub enum Doc2kgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Rendering error: {message}")]
    Rendering {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing resource: {0}")]
    ResourceMissing(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),
}

impl From<serde_json::Error> for Doc2kgError {
    fn from(err: serde_json::Error) -> Self {
        Doc2kgError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<image::ImageError> for Doc2kgError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io_err) => Doc2kgError::Io(io_err),
            other => Doc2kgError::Rendering {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

impl Doc2kgError {
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    pub fn parsing_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn rendering<S: Into<String>>(message: S) -> Self {
        Self::Rendering {
            message: message.into(),
            source: None,
        }
    }

    /// Abstract category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Doc2kgError::Io(_) => ErrorKind::Io,
            Doc2kgError::Parsing { .. } | Doc2kgError::Config { .. } => ErrorKind::Parse,
            Doc2kgError::Rendering { .. } => ErrorKind::Render,
            Doc2kgError::ResourceMissing(_) => ErrorKind::ResourceMissing,
            Doc2kgError::Pdf(pdf_err) => pdf_err.kind(),
        }
    }
}
