#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use content_tracker::clock::ManualClock;
use content_tracker::store::{MemoryStore, TrackerDocument};
use content_tracker::{ContentTracker, TrackerConfig};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub struct Harness {
    pub tracker: ContentTracker,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

pub fn harness() -> Harness {
    harness_with(TrackerDocument::default())
}

pub fn harness_with(doc: TrackerDocument) -> Harness {
    let store = Arc::new(MemoryStore::with_document(doc));
    let clock = Arc::new(ManualClock::new(start_time()));
    let tracker = ContentTracker::with_store(
        &TrackerConfig::default(),
        Box::new(store.clone()),
        clock.clone(),
    );
    Harness {
        tracker,
        store,
        clock,
    }
}
