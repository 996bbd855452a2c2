//! Thin HTTP wrapper around the live backend.
//!
//! Issues JSON requests with the standard header pair and converts every
//! failure mode into a classified `FetchError`: non-2xx responses go through
//! the error normalizer, while network-level failures (no response at all)
//! surface distinctly as `Unreachable`.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::domain::FetchError;
use crate::normalize;

/// HTTP client for the content backend.
///
/// The base endpoint is fixed at construction; switching it means building a
/// new client.
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportClient {
    /// Build a client against the configured endpoint.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET request and return the parsed JSON body.
    pub async fn get(&self, path: &str) -> Result<Value, FetchError> {
        self.get_with_query(path, &[]).await
    }

    /// Issue a GET request with URL-encoded query parameters.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, FetchError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason();
            let body = response.text().await.unwrap_or_default();
            return Err(normalize::error_from_response(
                status.as_u16(),
                status_text,
                &body,
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    /// Issue a POST request for fire-and-forget operations; the response body
    /// is ignored.
    pub async fn post(&self, path: &str) -> Result<(), FetchError> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason();
            let body = response.text().await.unwrap_or_default();
            return Err(normalize::error_from_response(
                status.as_u16(),
                status_text,
                &body,
            ));
        }

        Ok(())
    }
}
