//! arogya - Client-side content directory service for health-education media.
//!
//! Resolves health categories to their content items (articles, videos, PDFs,
//! audio), normalizes heterogeneous remote/mock data into a single item
//! model, and insulates callers from network failure, slow responses, and
//! shape drift between the mock dataset and the live backend.
//!
//! # Architecture
//!
//! One `ContentRepository` is polymorphic over a `ContentSource`, with the
//! in-memory mock dataset and the live HTTP backend as interchangeable
//! implementations selected at construction. The repository centralizes the
//! degrade-vs-propagate policy:
//! - Category fetches propagate classified `FetchError`s
//! - Featured/search degrade to empty sequences
//! - View increments are fire-and-forget
//!
//! # Modules
//!
//! - `domain`: Data structures (Category, ContentItem, FetchError)
//! - `media`: Pure media-URL parsing and thumbnail derivation
//! - `normalize`: Envelope-tolerant response normalization
//! - `directory`: Once-per-process cached category catalog
//! - `repository`: Orchestration core and fallback policy
//! - `source`: ContentSource trait, mock and live implementations
//! - `transport`: HTTP client wrapper
//! - `cli`: Command-line interface

pub mod cli;
pub mod config;
pub mod directory;
pub mod domain;
pub mod media;
pub mod normalize;
pub mod repository;
pub mod source;
pub mod transport;

// Re-export main types at crate root for convenience
pub use config::ServiceConfig;
pub use directory::CategoryDirectory;
pub use domain::{Category, ContentItem, ContentKind, FetchError, FetchOutcome, ThumbnailQuality};
pub use repository::ContentRepository;
pub use source::{ContentSource, LiveSource, MockSource};
pub use transport::TransportClient;
