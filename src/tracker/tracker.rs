use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::similarity::{SimilarityScorer, TfIdfScorer};
use crate::store::{JsonFileStore, PruneReport, RetentionPolicy, TrackerDocument, TrackerStore};
use crate::tracker::statistics::{DuplicateCheck, TrackerStatistics};
use crate::types::{
    Collection, ContentCategory, ContentRecord, ReplyEntry, RssFingerprint, Timestamp,
};

/// Remembers what the bot already emitted and answers "have we said this
/// before?".
///
/// Construct one per process and share it by reference. Every operation
/// takes the internal lock for its whole prune/read/modify/persist
/// sequence, so concurrent callers never lose each other's updates.
///
/// No operation returns an error. Store failures are logged and the tracker
/// keeps working from memory; similarity failures count as "not a
/// duplicate".
pub struct ContentTracker<S = TfIdfScorer> {
    state: Mutex<TrackerDocument>,
    store: Box<dyn TrackerStore>,
    clock: Arc<dyn Clock>,
    scorer: S,
    retention: RetentionPolicy,
    similarity_threshold: f64,
}

impl ContentTracker<TfIdfScorer> {
    /// File-backed tracker at `config.store_path` on the system clock.
    pub fn open(config: &TrackerConfig) -> Self {
        Self::with_store(
            config,
            Box::new(JsonFileStore::new(config.store_path.clone())),
            Arc::new(SystemClock),
        )
    }

    pub fn with_store(
        config: &TrackerConfig,
        store: Box<dyn TrackerStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_scorer(config, store, clock, TfIdfScorer::new(config.max_features))
    }
}

impl<S> ContentTracker<S>
where
    S: SimilarityScorer,
{
    pub fn with_scorer(
        config: &TrackerConfig,
        store: Box<dyn TrackerStore>,
        clock: Arc<dyn Clock>,
        scorer: S,
    ) -> Self {
        let doc = match store.load() {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                info!(store = %store.describe(), "no tracker document yet, starting empty");
                TrackerDocument::default()
            }
            Err(e) => {
                warn!(store = %store.describe(), error = %e, "failed to load tracker document, starting empty");
                TrackerDocument::default()
            }
        };

        info!(
            store = %store.describe(),
            posted = doc.posted_content.len(),
            email = doc.email_content.len(),
            threshold = config.similarity_threshold,
            "content tracker initialized"
        );

        Self {
            state: Mutex::new(doc),
            store,
            clock,
            scorer,
            retention: RetentionPolicy::from(&config.retention),
            similarity_threshold: config.similarity_threshold,
        }
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    // Posted content

    pub fn check_posted(&self, content: &str, context: &str) -> DuplicateCheck {
        self.check(Collection::Posted, content, context)
    }

    pub fn has_posted_similar_content(&self, content: &str, context: &str) -> bool {
        self.check_posted(content, context).is_duplicate
    }

    pub fn mark_content_posted(&self, content: &str, original_label: &str, context: &str) {
        self.record(Collection::Posted, content, original_label, context);
    }

    // Email content

    pub fn check_email(&self, content: &str, context: &str) -> DuplicateCheck {
        self.check(Collection::Email, content, context)
    }

    pub fn has_generated_similar_email(&self, content: &str, context: &str) -> bool {
        self.check_email(content, context).is_duplicate
    }

    pub fn mark_email_content_generated(&self, content: &str, original_label: &str, context: &str) {
        self.record(Collection::Email, content, original_label, context);
    }

    // Tweet replies

    pub fn has_replied_to_tweet(&self, tweet_id: &str) -> bool {
        let (guard, _) = self.pruned();
        guard.replied_tweets.contains_key(tweet_id)
    }

    /// `reply_id` may be empty when the reply id is unknown.
    pub fn mark_tweet_replied(&self, tweet_id: &str, reply_id: &str) {
        let (mut guard, now) = self.pruned();
        guard.replied_tweets.insert(
            tweet_id.to_string(),
            ReplyEntry {
                reply_id: reply_id.to_string(),
                timestamp: Timestamp::new(now),
            },
        );
        self.persist(&guard);
        debug!(tweet_id, reply_id, "marked tweet as replied");
    }

    // RSS inspiration

    pub fn has_used_rss_post(&self, username: &str, content: &str) -> bool {
        let fingerprint = RssFingerprint::new(username, content);
        let (guard, _) = self.pruned();
        guard.used_rss_posts.contains_key(&fingerprint)
    }

    pub fn mark_rss_post_used(&self, username: &str, content: &str) {
        let fingerprint = RssFingerprint::new(username, content);
        let (mut guard, now) = self.pruned();
        guard.used_rss_posts.insert(fingerprint.clone(), Timestamp::new(now));
        self.persist(&guard);
        debug!(username, fingerprint = fingerprint.as_str(), "marked RSS post as used");
    }

    // Themes

    /// True when `theme` was marked less than `window_hours` ago.
    ///
    /// Independent of theme retention: entries older than the retention
    /// window are gone regardless, and `window_hours` can only narrow that.
    pub fn has_used_theme_recently(&self, theme: &str, window_hours: u32) -> bool {
        let window = TimeDelta::hours(i64::from(window_hours));
        let (guard, now) = self.pruned();
        guard
            .content_themes
            .get(theme)
            .is_some_and(|at| at.age(now) < window)
    }

    pub fn mark_theme_used(&self, theme: &str) {
        let (mut guard, now) = self.pruned();
        guard
            .content_themes
            .insert(theme.to_string(), Timestamp::new(now));
        self.persist(&guard);
        debug!(theme, "marked theme as used");
    }

    // Maintenance

    /// Run a retention pass now. Other operations do this implicitly.
    pub fn prune(&self) -> PruneReport {
        let mut guard = self.lock();
        let now = self.clock.now();
        self.retention.prune(&mut guard, now)
    }

    pub fn get_statistics(&self) -> TrackerStatistics {
        let (guard, _) = self.pruned();
        TrackerStatistics::from_document(&guard, self.similarity_threshold)
    }

    fn check(&self, collection: Collection, content: &str, context: &str) -> DuplicateCheck {
        let category = classify(content, context);
        if category == ContentCategory::News {
            debug!(collection = collection.as_str(), "skipping similarity check for news content");
            return DuplicateCheck::not_duplicate(category);
        }

        let (guard, _) = self.pruned();
        let corpus: Vec<&str> = guard
            .records(collection)
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        if corpus.is_empty() {
            return DuplicateCheck::not_duplicate(category);
        }

        let max_similarity = match self.scorer.max_similarity(content, &corpus) {
            Ok(score) => score,
            Err(e) => {
                warn!(collection = collection.as_str(), error = %e, "similarity calculation failed");
                0.0
            }
        };
        let is_duplicate = max_similarity > self.similarity_threshold;

        debug!(
            collection = collection.as_str(),
            similarity = format_args!("{max_similarity:.3}"),
            threshold = self.similarity_threshold,
            similar = is_duplicate,
            "content similarity"
        );

        DuplicateCheck {
            category,
            max_similarity,
            is_duplicate,
        }
    }

    fn record(&self, collection: Collection, content: &str, original_label: &str, context: &str) {
        let category = classify(content, context);
        let (mut guard, now) = self.pruned();
        guard.records_mut(collection).push(ContentRecord {
            text: content.to_string(),
            category,
            original_label: original_label.to_string(),
            context: context.to_string(),
            recorded_at: Timestamp::new(now),
        });
        self.persist(&guard);
        debug!(collection = collection.as_str(), %category, "recorded content");
    }

    fn lock(&self) -> MutexGuard<'_, TrackerDocument> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Lock, then drop everything past retention.
    fn pruned(&self) -> (MutexGuard<'_, TrackerDocument>, DateTime<Utc>) {
        let mut guard = self.lock();
        let now = self.clock.now();
        let report = self.retention.prune(&mut guard, now);
        if report.total() > 0 {
            debug!(removed = report.total(), "pruned expired tracker entries");
        }
        (guard, now)
    }

    fn persist(&self, doc: &TrackerDocument) {
        if let Err(e) = self.store.save(doc) {
            warn!(store = %self.store.describe(), error = %e, "failed to save tracker document");
        }
    }
}
