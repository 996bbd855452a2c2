//! Content items and related value types.
//!
//! The item model is the single normalized shape the rest of the crate works
//! with, regardless of whether the bytes came from the live backend or the
//! in-memory mock dataset. Counters are owned by the server and are never
//! incremented locally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of content an item points at.
///
/// The kind determines which optional fields are expected: `duration` only
/// carries meaning for video/audio, `thumbnail_url` is expected for video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Article,
    Pdf,
    Audio,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Article => write!(f, "article"),
            ContentKind::Pdf => write!(f, "pdf"),
            ContentKind::Audio => write!(f, "audio"),
        }
    }
}

/// A single piece of health-education content.
///
/// Field names follow the wire format of the backend serializers. Absent
/// optional fields default so that shape drift between the mock and live
/// sources does not break deserialization; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub description: String,

    #[serde(rename = "content_type")]
    pub kind: ContentKind,

    /// Canonical access URL for the content itself
    pub url: String,

    /// Preview image URL; expected for video, optional otherwise
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Playback length, only meaningful for video/audio
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub author: String,

    /// Source organization or website label
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_featured: bool,

    /// Content verified by medical professionals
    #[serde(default)]
    pub is_verified: bool,

    // Server-owned counters, mutated only via the explicit increment call
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub share_count: u64,

    // Opaque timestamps, used for display/sort only
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Thumbnail quality tier.
///
/// The five literal tier names map to externally fixed thumbnail endpoints
/// and must be preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThumbnailQuality {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "mqdefault")]
    Medium,
    #[serde(rename = "hqdefault")]
    High,
    #[serde(rename = "sddefault")]
    Standard,
    #[serde(rename = "maxresdefault")]
    MaxRes,
}

impl ThumbnailQuality {
    /// The literal tier name used in thumbnail URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Medium => "mqdefault",
            ThumbnailQuality::High => "hqdefault",
            ThumbnailQuality::Standard => "sddefault",
            ThumbnailQuality::MaxRes => "maxresdefault",
        }
    }
}

impl Default for ThumbnailQuality {
    fn default() -> Self {
        ThumbnailQuality::High
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThumbnailQuality {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ThumbnailQuality::Default),
            "mqdefault" => Ok(ThumbnailQuality::Medium),
            "hqdefault" => Ok(ThumbnailQuality::High),
            "sddefault" => Ok(ThumbnailQuality::Standard),
            "maxresdefault" => Ok(ThumbnailQuality::MaxRes),
            _ => anyhow::bail!("Unknown thumbnail quality: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_wire_format() {
        let json = r#"{
            "id": 12,
            "title": "Balanced Diet Essentials",
            "description": "Learn about the importance of a balanced diet.",
            "content_type": "article",
            "url": "https://example.org/balanced-diet",
            "author": "Dr. Sharma",
            "source": "WHO",
            "tags": ["diet", "nutrition"],
            "is_featured": true,
            "is_verified": true,
            "view_count": 42,
            "like_count": 3,
            "share_count": 1,
            "created_at": "2024-01-15T00:00:00Z",
            "updated_at": "2024-01-15T00:00:00Z"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ContentKind::Article);
        assert_eq!(item.thumbnail_url, None);
        assert_eq!(item.duration, None);
        assert_eq!(item.view_count, 42);
    }

    #[test]
    fn test_content_item_minimal_shape() {
        // A live backend trimming optional fields must still deserialize
        let json = r#"{
            "id": 1,
            "title": "CPR Basics",
            "description": "Life-saving techniques.",
            "content_type": "video",
            "url": "https://youtu.be/dQw4w9WgXcQ"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ContentKind::Video);
        assert_eq!(item.view_count, 0);
        assert!(item.tags.is_empty());
        assert!(!item.is_featured);
    }

    #[test]
    fn test_thumbnail_quality_round_trip() {
        for name in [
            "default",
            "mqdefault",
            "hqdefault",
            "sddefault",
            "maxresdefault",
        ] {
            let quality: ThumbnailQuality = name.parse().unwrap();
            assert_eq!(quality.as_str(), name);
        }
        assert!("hd720".parse::<ThumbnailQuality>().is_err());
    }
}
