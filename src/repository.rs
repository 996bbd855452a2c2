//! Content repository: the orchestration core.
//!
//! Owns the degrade-vs-propagate policy: category fetches surface classified
//! errors to the caller, while featured/search/view-increment are best-effort
//! enhancements that degrade to an empty result or a logged no-op. The
//! backing source (mock or live) is fixed at construction; a failed live call
//! is never silently answered with mock data.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::directory::CategoryDirectory;
use crate::domain::{ContentItem, FetchOutcome, ThumbnailQuality};
use crate::media;
use crate::source::{ContentSource, LiveSource, MockSource};
use crate::transport::TransportClient;

/// Orchestration core over a single backing content source.
pub struct ContentRepository {
    source: Arc<dyn ContentSource>,
    directory: CategoryDirectory,
    default_quality: ThumbnailQuality,
}

impl ContentRepository {
    /// Build a repository over an explicit source.
    pub fn new(source: Arc<dyn ContentSource>, config: &ServiceConfig) -> Self {
        Self {
            directory: CategoryDirectory::new(source.clone()),
            source,
            default_quality: config.default_thumbnail_quality,
        }
    }

    /// Repository against the live backend.
    pub fn live(config: &ServiceConfig) -> Result<Self> {
        let transport = TransportClient::new(config)?;
        Ok(Self::new(Arc::new(LiveSource::new(transport)), config))
    }

    /// Repository against the in-memory mock dataset.
    pub fn mock(config: &ServiceConfig) -> Self {
        let source = MockSource::new(Duration::from_millis(config.mock_delay_ms));
        Self::new(Arc::new(source), config)
    }

    /// The category directory backed by the same source.
    pub fn directory(&self) -> &CategoryDirectory {
        &self.directory
    }

    /// Fetch the content of a category.
    ///
    /// Propagates every failure kind: an unresolvable slug surfaces as
    /// not-found, transport failures keep their classification. An existing
    /// category with no content is an empty success.
    pub async fn get_by_category(&self, slug: &str) -> FetchOutcome {
        debug!(source = self.source.name(), slug, "fetching category content");
        self.source.fetch_by_category(slug).await
    }

    /// Featured content, best-effort. Degrades to an empty sequence on any
    /// failure; it augments screens rather than driving them.
    pub async fn featured(&self) -> Vec<ContentItem> {
        match self.source.fetch_featured().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "featured content fetch failed, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Search content, best-effort. The query is not pre-validated; blank
    /// queries mean whatever the backend says they mean.
    pub async fn search(&self, query: &str) -> Vec<ContentItem> {
        match self.source.search(query).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, query, "search failed, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Fire-and-forget view increment. Failures are logged, never surfaced,
    /// never retried; local counters do not change.
    pub async fn record_view(&self, content_id: u64) {
        if let Err(e) = self.source.increment_view(content_id).await {
            warn!(content_id, error = %e, "view increment failed");
        }
    }

    /// Best thumbnail for an item: its explicit thumbnail URL if set,
    /// otherwise one derived from the media URL at the configured default
    /// quality.
    pub fn thumbnail_for(&self, item: &ContentItem) -> Option<String> {
        if let Some(ref url) = item.thumbnail_url {
            return Some(url.clone());
        }

        let derived = media::thumbnail_url(&item.url, self.default_quality);
        if derived.is_empty() {
            None
        } else {
            Some(derived)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;

    fn repository() -> ContentRepository {
        let config = ServiceConfig {
            mock_delay_ms: 0,
            ..ServiceConfig::default()
        };
        ContentRepository::mock(&config)
    }

    fn item(url: &str, thumbnail: Option<&str>) -> ContentItem {
        ContentItem {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            kind: ContentKind::Video,
            url: url.to_string(),
            thumbnail_url: thumbnail.map(String::from),
            duration: None,
            author: String::new(),
            source: String::new(),
            tags: Vec::new(),
            is_featured: false,
            is_verified: false,
            view_count: 0,
            like_count: 0,
            share_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_get_by_category_against_mock() {
        let items = repository().get_by_category("nutrition").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Balanced Diet Essentials");
    }

    #[test]
    fn test_thumbnail_prefers_explicit_url() {
        let repo = repository();
        let with_thumb = item(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            Some("https://cdn.example.org/thumb.jpg"),
        );
        assert_eq!(
            repo.thumbnail_for(&with_thumb),
            Some("https://cdn.example.org/thumb.jpg".to_string())
        );
    }

    #[test]
    fn test_thumbnail_derived_at_default_quality() {
        let repo = repository();
        let video = item("https://www.youtube.com/watch?v=dQw4w9WgXcQ", None);
        assert_eq!(
            repo.thumbnail_for(&video),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string())
        );
    }

    #[test]
    fn test_thumbnail_none_when_underivable() {
        let repo = repository();
        let article = item("https://example.org/article", None);
        assert_eq!(repo.thumbnail_for(&article), None);
    }
}
