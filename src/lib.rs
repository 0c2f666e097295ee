//! Near-duplicate detection and retention tracking for automated social content.
//!
//! `content-tracker` remembers what a content bot has already posted, emailed,
//! replied to and drawn inspiration from. Candidate text is classified by
//! keyword; non-news text is compared against recent history with TF-IDF
//! cosine similarity over unigrams and bigrams. Each history collection
//! expires on its own retention window.
//!
//! The entry point is [`ContentTracker`]. Build one at startup and share it.

pub mod classify;
pub mod clock;
pub mod config;
pub mod similarity;
pub mod store;
pub mod tracker;
pub mod types;

pub use config::{ConfigError, RetentionConfig, TrackerConfig};
pub use tracker::{ContentTracker, DuplicateCheck, TrackerStatistics};
