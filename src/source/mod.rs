//! Content source capability.
//!
//! The repository is polymorphic over a single `ContentSource`, with the mock
//! in-memory dataset and the live backend as interchangeable implementations
//! selected at construction. There is no runtime fallback between them.

pub mod live;
pub mod mock;

use async_trait::async_trait;

use crate::domain::{Category, ContentItem, FetchError};

pub use live::LiveSource;
pub use mock::MockSource;

/// A backing source of categories and content.
///
/// Every method returns a classified result; degrade-vs-propagate policy is
/// the repository's concern, not the source's.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch the category catalog.
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;

    /// Fetch the content belonging to a category slug. An empty sequence is
    /// a valid outcome for a category with no content.
    async fn fetch_by_category(&self, slug: &str) -> Result<Vec<ContentItem>, FetchError>;

    /// Fetch featured content across all categories.
    async fn fetch_featured(&self) -> Result<Vec<ContentItem>, FetchError>;

    /// Full-text search over content.
    async fn search(&self, query: &str) -> Result<Vec<ContentItem>, FetchError>;

    /// Ask the source to increment a view counter. Counters are never
    /// mutated locally; callers must not assume the local value reflects the
    /// server's afterwards.
    async fn increment_view(&self, content_id: u64) -> Result<(), FetchError>;
}
