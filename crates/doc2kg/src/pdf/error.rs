use crate::error::ErrorKind;
use std::fmt;

#[derive(Debug, Clone)]
pub enum PdfError {
    InvalidPdf(String),
    PasswordRequired,
    LibraryUnavailable(String),
    TextExtractionFailed(String),
    RenderingFailed(String),
}

impl PdfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PdfError::InvalidPdf(_)
            | PdfError::PasswordRequired
            | PdfError::TextExtractionFailed(_) => ErrorKind::Parse,
            PdfError::LibraryUnavailable(_) => ErrorKind::ResourceMissing,
            PdfError::RenderingFailed(_) => ErrorKind::Render,
        }
    }
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::InvalidPdf(msg) => write!(f, "Invalid PDF: {}", msg),
            PdfError::PasswordRequired => write!(f, "PDF is password-protected"),
            PdfError::LibraryUnavailable(msg) => write!(f, "Pdfium library unavailable: {}", msg),
            PdfError::TextExtractionFailed(msg) => write!(f, "Text extraction failed: {}", msg),
            PdfError::RenderingFailed(msg) => write!(f, "Page rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for PdfError {}

pub type Result<T> = std::result::Result<T, PdfError>;
