use std::fmt;

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Result of keyword classification.
///
/// `News` is time-sensitive and exempt from similarity suppression;
/// `Personal` is prose that reads as repetitive when recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    News,
    Personal,
}

impl ContentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::News => "news",
            ContentCategory::Personal => "personal",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text collections that take part in similarity checks.
/// Records are only ever compared within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Posted,
    Email,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Posted => "posted_content",
            Collection::Email => "email_content",
        }
    }
}

/// One previously emitted piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(rename = "content")]
    pub text: String,
    #[serde(rename = "content_type")]
    pub category: ContentCategory,
    /// Caller-supplied tag, kept for diagnostics only.
    #[serde(rename = "original_type", default)]
    pub original_label: String,
    /// Used for classification only, never for similarity.
    #[serde(default)]
    pub context: String,
    #[serde(rename = "timestamp")]
    pub recorded_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEntry {
    #[serde(default)]
    pub reply_id: String,
    pub timestamp: Timestamp,
}
