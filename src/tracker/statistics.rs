use serde::{Deserialize, Serialize};

use crate::store::TrackerDocument;
use crate::types::ContentCategory;

/// Live entry counts per collection, plus the active threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerStatistics {
    pub replied_tweets: usize,
    pub used_rss_posts: usize,
    pub email_content: usize,
    pub posted_content: usize,
    pub content_themes: usize,
    pub similarity_threshold: f64,
}

impl TrackerStatistics {
    pub(crate) fn from_document(doc: &TrackerDocument, similarity_threshold: f64) -> Self {
        Self {
            replied_tweets: doc.replied_tweets.len(),
            used_rss_posts: doc.used_rss_posts.len(),
            email_content: doc.email_content.len(),
            posted_content: doc.posted_content.len(),
            content_themes: doc.content_themes.len(),
            similarity_threshold,
        }
    }
}

/// Outcome of one near-duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DuplicateCheck {
    pub category: ContentCategory,
    /// Best cosine score against the collection; 0.0 when skipped.
    pub max_similarity: f64,
    pub is_duplicate: bool,
}

impl DuplicateCheck {
    pub(crate) fn not_duplicate(category: ContentCategory) -> Self {
        Self {
            category,
            max_similarity: 0.0,
            is_duplicate: false,
        }
    }
}
