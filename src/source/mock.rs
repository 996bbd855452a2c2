//! In-memory mock source.
//!
//! A fixed dataset behind the same `ContentSource` interface as the live
//! backend, so screens can be exercised without a network dependency. A fixed
//! artificial delay models perceived network latency so loading states behave
//! identically regardless of which source is active.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::{Category, ContentItem, ContentKind, FetchError};
use crate::source::ContentSource;

/// A content item together with its category membership.
///
/// Membership lives only inside the mock; the public item model expresses it
/// through the query, not as a stored back-reference.
struct MockRecord {
    category: &'static str,
    item: ContentItem,
}

/// Content source backed by a fixed in-memory dataset.
pub struct MockSource {
    delay: Duration,
    categories: Vec<Category>,
    records: Vec<MockRecord>,
}

impl MockSource {
    /// Create a mock source with the given artificial delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            categories: fixture_categories(),
            records: fixture_records(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl ContentSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.simulate_latency().await;
        Ok(self.categories.clone())
    }

    async fn fetch_by_category(&self, slug: &str) -> Result<Vec<ContentItem>, FetchError> {
        self.simulate_latency().await;

        // Exact match on the category field, preserving dataset order. A slug
        // with no matches yields an empty success, not an error.
        Ok(self
            .records
            .iter()
            .filter(|record| record.category == slug)
            .map(|record| record.item.clone())
            .collect())
    }

    async fn fetch_featured(&self) -> Result<Vec<ContentItem>, FetchError> {
        self.simulate_latency().await;

        Ok(self
            .records
            .iter()
            .filter(|record| record.item.is_featured)
            .map(|record| record.item.clone())
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<ContentItem>, FetchError> {
        self.simulate_latency().await;

        let query_lower = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|record| {
                let item = &record.item;
                item.title.to_lowercase().contains(&query_lower)
                    || item.description.to_lowercase().contains(&query_lower)
                    || item
                        .tags
                        .iter()
                        .any(|t| t.to_lowercase().contains(&query_lower))
            })
            .map(|record| record.item.clone())
            .collect())
    }

    async fn increment_view(&self, content_id: u64) -> Result<(), FetchError> {
        // Counters are server-owned; the mock has no server, so this is a
        // logged no-op.
        debug!(content_id, "mock view increment ignored");
        Ok(())
    }
}

fn category(
    id: u64,
    name: &str,
    slug: &str,
    icon: &str,
    color: &str,
    order: u32,
    is_active: bool,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        icon: Some(icon.to_string()),
        color: color.to_string(),
        order,
        is_active,
    }
}

fn fixture_categories() -> Vec<Category> {
    vec![
        category(1, "Nutrition", "nutrition", "nutrition", "#4CAF50", 1, true),
        category(2, "Hygiene", "hygiene", "water", "#2196F3", 2, true),
        category(
            3,
            "Child Health",
            "child-health",
            "happy",
            "#FF9800",
            3,
            true,
        ),
        category(
            4,
            "Mental Health",
            "mental-health",
            "leaf",
            "#9C27B0",
            4,
            true,
        ),
        category(5, "First Aid", "first-aid", "medkit", "#F44336", 5, true),
        category(
            6,
            "Seasonal Diseases",
            "seasonal-diseases",
            "thermometer",
            "#00BCD4",
            6,
            true,
        ),
        // Retired category, still resolvable by slug for deep links
        category(
            7,
            "Elderly Care",
            "elderly-care",
            "walk",
            "#795548",
            7,
            false,
        ),
    ]
}

struct ItemSeed {
    id: u64,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    kind: ContentKind,
    url: &'static str,
    duration: Option<&'static str>,
    tags: &'static [&'static str],
    is_featured: bool,
    created_at: &'static str,
}

fn build(seed: ItemSeed) -> MockRecord {
    MockRecord {
        category: seed.category,
        item: ContentItem {
            id: seed.id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            kind: seed.kind,
            url: seed.url.to_string(),
            thumbnail_url: None,
            duration: seed.duration.map(String::from),
            author: "E-Arogya Editorial".to_string(),
            source: "E-Arogya".to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            is_featured: seed.is_featured,
            is_verified: true,
            view_count: 0,
            like_count: 0,
            share_count: 0,
            created_at: seed.created_at.to_string(),
            updated_at: seed.created_at.to_string(),
        },
    }
}

fn fixture_records() -> Vec<MockRecord> {
    let video_url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    vec![
        build(ItemSeed {
            id: 1,
            category: "nutrition",
            title: "Balanced Diet Essentials",
            description: "Learn about the importance of a balanced diet for optimal health.",
            kind: ContentKind::Article,
            url: "https://example.org/articles/balanced-diet",
            duration: None,
            tags: &["diet", "nutrients"],
            is_featured: true,
            created_at: "2024-01-15",
        }),
        build(ItemSeed {
            id: 2,
            category: "hygiene",
            title: "Proper Hand Washing Techniques",
            description: "Step-by-step guide to effective hand hygiene.",
            kind: ContentKind::Article,
            url: "https://example.org/articles/hand-washing",
            duration: None,
            tags: &["hygiene", "infection"],
            is_featured: false,
            created_at: "2024-01-10",
        }),
        build(ItemSeed {
            id: 3,
            category: "hygiene",
            title: "Personal Hygiene Routine",
            description: "Daily hygiene practices for better health.",
            kind: ContentKind::Video,
            url: video_url,
            duration: Some("8:45"),
            tags: &["hygiene", "routine"],
            is_featured: false,
            created_at: "2024-01-11",
        }),
        build(ItemSeed {
            id: 4,
            category: "child-health",
            title: "Child Vaccination Schedule",
            description: "Complete guide to childhood immunizations.",
            kind: ContentKind::Pdf,
            url: "https://example.org/pdfs/vaccination-schedule.pdf",
            duration: None,
            tags: &["vaccination", "children"],
            is_featured: true,
            created_at: "2024-01-20",
        }),
        build(ItemSeed {
            id: 5,
            category: "child-health",
            title: "Child Safety at Home",
            description: "Creating a safe environment for children.",
            kind: ContentKind::Video,
            url: video_url,
            duration: Some("12:15"),
            tags: &["safety", "children"],
            is_featured: false,
            created_at: "2024-01-21",
        }),
        build(ItemSeed {
            id: 6,
            category: "mental-health",
            title: "Managing Stress and Anxiety",
            description: "Effective strategies for mental wellness.",
            kind: ContentKind::Article,
            url: "https://example.org/articles/stress-management",
            duration: None,
            tags: &["stress", "wellness"],
            is_featured: false,
            created_at: "2024-01-18",
        }),
        build(ItemSeed {
            id: 7,
            category: "mental-health",
            title: "Meditation for Beginners",
            description: "Simple meditation techniques for stress relief.",
            kind: ContentKind::Audio,
            url: "https://example.org/audio/meditation-intro.mp3",
            duration: Some("15:00"),
            tags: &["meditation", "stress"],
            is_featured: false,
            created_at: "2024-01-19",
        }),
        build(ItemSeed {
            id: 8,
            category: "first-aid",
            title: "Basic First Aid Techniques",
            description: "Essential first aid skills everyone should know.",
            kind: ContentKind::Article,
            url: "https://example.org/articles/first-aid-basics",
            duration: None,
            tags: &["emergency", "first aid"],
            is_featured: false,
            created_at: "2024-01-12",
        }),
        build(ItemSeed {
            id: 9,
            category: "first-aid",
            title: "CPR Training Video",
            description: "Learn life-saving CPR techniques.",
            kind: ContentKind::Video,
            url: video_url,
            duration: Some("20:30"),
            tags: &["cpr", "emergency"],
            is_featured: true,
            created_at: "2024-01-13",
        }),
        build(ItemSeed {
            id: 10,
            category: "seasonal-diseases",
            title: "Seasonal Flu Prevention",
            description: "How to protect yourself during flu season.",
            kind: ContentKind::Article,
            url: "https://example.org/articles/flu-prevention",
            duration: None,
            tags: &["flu", "prevention"],
            is_featured: false,
            created_at: "2024-01-25",
        }),
        build(ItemSeed {
            id: 11,
            category: "seasonal-diseases",
            title: "Winter Health Tips",
            description: "Staying healthy during cold season.",
            kind: ContentKind::Video,
            url: video_url,
            duration: Some("9:20"),
            tags: &["winter", "prevention"],
            is_featured: false,
            created_at: "2024-01-26",
        }),
    ]
}
