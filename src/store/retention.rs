use chrono::{DateTime, TimeDelta, Utc};

use crate::config::RetentionConfig;
use crate::store::document::TrackerDocument;

/// Counts of entries dropped by one pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub posted_content: usize,
    pub email_content: usize,
    pub replied_tweets: usize,
    pub used_rss_posts: usize,
    pub content_themes: usize,
}

impl PruneReport {
    pub fn total(&self) -> usize {
        self.posted_content
            + self.email_content
            + self.replied_tweets
            + self.used_rss_posts
            + self.content_themes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub posted_content: TimeDelta,
    pub email_content: TimeDelta,
    pub replied_tweets: TimeDelta,
    pub used_rss_posts: TimeDelta,
    pub content_themes: TimeDelta,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::from(&RetentionConfig::default())
    }
}

impl From<&RetentionConfig> for RetentionPolicy {
    fn from(config: &RetentionConfig) -> Self {
        Self {
            posted_content: config.posted_content(),
            email_content: config.email_content(),
            replied_tweets: config.replied_tweets(),
            used_rss_posts: config.used_rss_posts(),
            content_themes: config.content_themes(),
        }
    }
}

impl RetentionPolicy {
    /// Drop every entry older than its collection's window, measured from `now`.
    /// Entries exactly at the cutoff are kept.
    pub fn prune(&self, doc: &mut TrackerDocument, now: DateTime<Utc>) -> PruneReport {
        let posted_cutoff = cutoff(now, self.posted_content);
        let email_cutoff = cutoff(now, self.email_content);
        let replied_cutoff = cutoff(now, self.replied_tweets);
        let rss_cutoff = cutoff(now, self.used_rss_posts);
        let themes_cutoff = cutoff(now, self.content_themes);

        let before = (
            doc.posted_content.len(),
            doc.email_content.len(),
            doc.replied_tweets.len(),
            doc.used_rss_posts.len(),
            doc.content_themes.len(),
        );

        doc.posted_content
            .retain(|r| r.recorded_at.as_datetime() >= posted_cutoff);
        doc.email_content
            .retain(|r| r.recorded_at.as_datetime() >= email_cutoff);
        doc.replied_tweets
            .retain(|_, entry| entry.timestamp.as_datetime() >= replied_cutoff);
        doc.used_rss_posts
            .retain(|_, at| at.as_datetime() >= rss_cutoff);
        doc.content_themes
            .retain(|_, at| at.as_datetime() >= themes_cutoff);

        PruneReport {
            posted_content: before.0 - doc.posted_content.len(),
            email_content: before.1 - doc.email_content.len(),
            replied_tweets: before.2 - doc.replied_tweets.len(),
            used_rss_posts: before.3 - doc.used_rss_posts.len(),
            content_themes: before.4 - doc.content_themes.len(),
        }
    }
}

/// `now - window`, or the earliest representable instant when the window
/// reaches past it (nothing expires).
fn cutoff(now: DateTime<Utc>, window: TimeDelta) -> DateTime<Utc> {
    now.checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
