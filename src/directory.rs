//! Category directory with a once-per-process catalog cache.
//!
//! The catalog is fetched at most once and held for the process lifetime;
//! population is single-flight, so concurrent first readers share one fetch.
//! Once populated the cache is read-only.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::{Category, FetchError};
use crate::source::ContentSource;

/// Read-only view over the category catalog.
pub struct CategoryDirectory {
    source: Arc<dyn ContentSource>,
    cache: OnceCell<Vec<Category>>,
}

impl CategoryDirectory {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// The full catalog, sorted ascending by order rank with ties broken by
    /// identifier. Fetched on first access only.
    async fn catalog(&self) -> Result<&[Category], FetchError> {
        let categories = self
            .cache
            .get_or_try_init(|| async {
                debug!(source = self.source.name(), "populating category catalog");
                let mut categories = self.source.fetch_categories().await?;
                categories.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
                Ok(categories)
            })
            .await?;

        Ok(categories.as_slice())
    }

    /// Active categories in display order.
    pub async fn list_active(&self) -> Result<Vec<Category>, FetchError> {
        Ok(self
            .catalog()
            .await?
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    /// Exact, case-sensitive slug lookup. Inactive categories still resolve,
    /// so deep links into retired topics keep working.
    pub async fn resolve(&self, slug: &str) -> Result<Option<Category>, FetchError> {
        Ok(self
            .catalog()
            .await?
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }
}
