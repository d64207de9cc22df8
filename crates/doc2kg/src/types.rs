use crate::error::{Doc2kgError, ErrorKind};
use serde::Serialize;

/// Text extracted from a document together with its page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextExtraction {
    pub text: String,
    pub pages: usize,
}

/// File names (not paths) of the page images written to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageExtraction {
    pub images: Vec<String>,
}

/// The JSON contract printed by every command-line operation.
///
/// Serializes as `{"success": true, ...payload}` on success and as
/// `{"success": false, "error": "...", "error_kind": "..."}` on failure.
#[derive(Debug, Serialize)]
pub struct Response<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl<T> Response<T> {
    pub fn success(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(err: &Doc2kgError) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
        }
    }
}

impl<T> From<crate::Result<T>> for Response<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => {
                tracing::debug!("Operation failed: {:?}", err);
                Response::failure(&err)
            }
        }
    }
}
