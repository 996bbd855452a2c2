//! Health categories and their directory metadata.
//!
//! Categories are administered by the remote source and are read-only on the
//! client. The slug is the stable external lookup key; the numeric id only
//! breaks ordering ties.

use serde::{Deserialize, Serialize};

/// A health-education category (nutrition, hygiene, first-aid, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// URL-safe lookup key, unique and immutable once created
    pub slug: String,

    /// Longer description (may be absent)
    #[serde(default)]
    pub description: Option<String>,

    /// Icon name for frontend display (may be absent)
    #[serde(default)]
    pub icon: Option<String>,

    /// Hex color code, always present even when icon/description are not
    pub color: String,

    /// Display order, ascending = higher priority
    #[serde(default)]
    pub order: u32,

    /// Inactive categories are hidden from listings but still resolvable
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
