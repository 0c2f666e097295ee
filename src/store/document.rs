use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Collection, ContentRecord, ReplyEntry, RssFingerprint, Timestamp};

/// The whole persisted tracker state.
///
/// Every key defaults to empty so a partially written or older document
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerDocument {
    #[serde(default)]
    pub posted_content: Vec<ContentRecord>,
    #[serde(default)]
    pub email_content: Vec<ContentRecord>,
    #[serde(default)]
    pub replied_tweets: BTreeMap<String, ReplyEntry>,
    #[serde(default)]
    pub used_rss_posts: BTreeMap<RssFingerprint, Timestamp>,
    #[serde(default)]
    pub content_themes: BTreeMap<String, Timestamp>,
}

impl TrackerDocument {
    pub fn records(&self, collection: Collection) -> &[ContentRecord] {
        match collection {
            Collection::Posted => &self.posted_content,
            Collection::Email => &self.email_content,
        }
    }

    pub fn records_mut(&mut self, collection: Collection) -> &mut Vec<ContentRecord> {
        match collection {
            Collection::Posted => &mut self.posted_content,
            Collection::Email => &mut self.email_content,
        }
    }
}
