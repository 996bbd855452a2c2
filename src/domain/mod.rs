//! Domain types for the content directory service.
//!
//! This module contains the core data structures:
//! - Category: directory metadata for a health topic
//! - ContentItem: normalized content model shared by mock and live sources
//! - FetchError: classified failure taxonomy

pub mod category;
pub mod content;
pub mod error;

// Re-export commonly used types
pub use category::Category;
pub use content::{ContentItem, ContentKind, ThumbnailQuality};
pub use error::FetchError;

/// Result of a content query: a (possibly empty) item sequence or a
/// classified failure. Empty is a valid, non-error outcome.
pub type FetchOutcome = Result<Vec<ContentItem>, FetchError>;
