//! Service configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (AROGYA_BASE_URL, AROGYA_TIMEOUT_MS)
//! 2. Config file (arogya.yaml, or the path in AROGYA_CONFIG)
//! 3. Defaults
//!
//! The resolved value is passed explicitly at construction; there is no
//! global mutable endpoint. Switching the base URL means rebuilding the
//! transport client.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::ThumbnailQuality;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub default_thumbnail_quality: Option<ThumbnailQuality>,
    pub mock_delay_ms: Option<u64>,
}

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Endpoint root of the live backend, e.g. `http://127.0.0.1:8000/api`
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Tier used when deriving thumbnails without an explicit request
    pub default_thumbnail_quality: ThumbnailQuality,

    /// Artificial latency of the mock source, so UI loading states are
    /// exercised identically regardless of which source is active
    pub mock_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_mock_delay_ms() -> u64 {
    1_000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            default_thumbnail_quality: ThumbnailQuality::default(),
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self> {
        let file = match std::env::var("AROGYA_CONFIG") {
            Ok(path) => Some(Self::read_file(Path::new(&path))?),
            Err(_) => {
                let default_path = Path::new("arogya.yaml");
                if default_path.exists() {
                    Some(Self::read_file(default_path)?)
                } else {
                    None
                }
            }
        };

        let file = file.unwrap_or_default();

        let base_url = std::env::var("AROGYA_BASE_URL")
            .ok()
            .or(file.base_url)
            .unwrap_or_else(default_base_url);

        let timeout_ms = match std::env::var("AROGYA_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid AROGYA_TIMEOUT_MS: {}", raw))?,
            Err(_) => file.timeout_ms.unwrap_or_else(default_timeout_ms),
        };

        Ok(Self {
            base_url,
            timeout_ms,
            default_thumbnail_quality: file.default_thumbnail_quality.unwrap_or_default(),
            mock_delay_ms: file.mock_delay_ms.unwrap_or_else(default_mock_delay_ms),
        })
    }

    /// Load and parse a config file
    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
