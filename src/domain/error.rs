//! Typed failure taxonomy for content fetches.
//!
//! Every public operation in this crate exits with either a success value or
//! one of these classified errors; nothing unstructured crosses the boundary.

use thiserror::Error;

/// Classified failure of a content fetch.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The slug or content id does not exist on the remote source (HTTP 404)
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-2xx HTTP response
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// No response was obtained at all; retry strategy differs from the
    /// HTTP-status case, so it is surfaced distinctly
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The response arrived but its body could not be normalized
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Classify an HTTP status code into the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 404 {
            FetchError::NotFound { message }
        } else {
            FetchError::Http { status, message }
        }
    }

    /// The original HTTP status code, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound { .. } => Some(404),
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Unreachable(_) | FetchError::Malformed(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}
