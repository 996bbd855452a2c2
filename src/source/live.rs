//! Live backend source.
//!
//! Maps each capability to its backend endpoint and runs every list response
//! through the envelope-tolerant normalizer. Only the first page of any
//! paginated response is consumed.

use async_trait::async_trait;

use crate::domain::{Category, ContentItem, FetchError};
use crate::normalize;
use crate::source::ContentSource;
use crate::transport::TransportClient;

/// Content source backed by the remote HTTP API.
pub struct LiveSource {
    transport: TransportClient,
}

impl LiveSource {
    pub fn new(transport: TransportClient) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ContentSource for LiveSource {
    fn name(&self) -> &str {
        "live"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let body = self.transport.get("/categories/").await?;
        normalize::sequence(body)
    }

    async fn fetch_by_category(&self, slug: &str) -> Result<Vec<ContentItem>, FetchError> {
        let body = self
            .transport
            .get(&format!("/categories/{}/content/", slug))
            .await?;
        normalize::items(body)
    }

    async fn fetch_featured(&self) -> Result<Vec<ContentItem>, FetchError> {
        let body = self.transport.get("/content/featured/").await?;
        normalize::items(body)
    }

    async fn search(&self, query: &str) -> Result<Vec<ContentItem>, FetchError> {
        // The query is URL-encoded by the transport; blank queries pass
        // through unvalidated and mean whatever the backend says they mean.
        let body = self
            .transport
            .get_with_query("/content/search/", &[("q", query)])
            .await?;
        normalize::items(body)
    }

    async fn increment_view(&self, content_id: u64) -> Result<(), FetchError> {
        self.transport
            .post(&format!("/content/{}/increment_view/", content_id))
            .await
    }
}
