mod common;

use std::fs;
use std::sync::Arc;
use std::thread;

use common::{harness, start_time};
use content_tracker::clock::ManualClock;
use content_tracker::store::{JsonFileStore, TrackerStore};
use content_tracker::types::ContentCategory;
use content_tracker::{ContentTracker, TrackerConfig};
use serde_json::Value;
use tempfile::tempdir;

const LESSON: &str = "Here's a lesson I learned building my startup";

fn file_tracker(path: &std::path::Path, clock: Arc<ManualClock>) -> ContentTracker {
    ContentTracker::with_store(
        &TrackerConfig::default(),
        Box::new(JsonFileStore::new(path)),
        clock,
    )
}

#[test]
fn state_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    let clock = Arc::new(ManualClock::new(start_time()));

    {
        let tracker = file_tracker(&path, clock.clone());
        tracker.mark_content_posted(LESSON, "lesson", "");
        tracker.mark_email_content_generated("Weekly digest on hiring", "digest", "");
        tracker.mark_tweet_replied("1001", "2001");
        tracker.mark_rss_post_used("paulg", "Do things that don't scale");
        tracker.mark_theme_used("hiring");
    }

    let tracker = file_tracker(&path, clock);
    assert!(tracker.has_posted_similar_content(LESSON, ""));
    assert!(tracker.has_generated_similar_email("Weekly digest on hiring", ""));
    assert!(tracker.has_replied_to_tweet("1001"));
    assert!(tracker.has_used_rss_post("paulg", "Do things that don't scale"));
    assert!(tracker.has_used_theme_recently("hiring", 1));
}

#[test]
fn absent_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));

    let stats = tracker.get_statistics();
    assert_eq!(stats.posted_content + stats.replied_tweets, 0);
    assert!(!path.exists());
}

#[test]
fn malformed_file_starts_empty_and_is_replaced_on_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, "{ not json").unwrap();

    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));
    assert_eq!(tracker.get_statistics().posted_content, 0);

    tracker.mark_tweet_replied("1001", "");
    let reloaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert!(reloaded.replied_tweets.contains_key("1001"));
}

#[test]
fn missing_parent_directory_is_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state").join("nested").join("tracker.json");

    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));
    tracker.mark_theme_used("pricing");
    assert!(path.exists());
}

#[test]
fn unwritable_store_keeps_working_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    // Parent of the store path is a regular file, so every save fails.
    let path = blocker.join("tracker.json");
    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));

    tracker.mark_content_posted(LESSON, "", "");
    assert!(tracker.has_posted_similar_content(LESSON, ""));
}

#[test]
fn persisted_document_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));

    tracker.mark_content_posted(LESSON, "lesson", "founder thread");
    tracker.mark_tweet_replied("1001", "2001");
    tracker.mark_rss_post_used("paulg", "essay");
    tracker.mark_theme_used("hiring");

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let root = json.as_object().unwrap();
    for key in [
        "posted_content",
        "email_content",
        "replied_tweets",
        "used_rss_posts",
        "content_themes",
    ] {
        assert!(root.contains_key(key), "missing key {key}");
    }

    let posted = &json["posted_content"][0];
    assert_eq!(posted["content"], LESSON);
    assert_eq!(posted["content_type"], "personal");
    assert_eq!(posted["original_type"], "lesson");
    assert_eq!(posted["context"], "founder thread");
    assert_eq!(posted["timestamp"], "2025-06-01T12:00:00.000000Z");

    assert_eq!(json["replied_tweets"]["1001"]["reply_id"], "2001");
    assert!(json["replied_tweets"]["1001"]["timestamp"].is_string());
    assert!(json["content_themes"]["hiring"].is_string());

    let fingerprints = json["used_rss_posts"].as_object().unwrap();
    assert_eq!(fingerprints.len(), 1);
    assert!(fingerprints.keys().all(|k| k.starts_with("paulg:")));
}

#[test]
fn legacy_document_with_naive_timestamps_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    let legacy = r#"{
        "posted_content": [
            {"content": "Here's a lesson I learned building my startup",
             "content_type": "personal", "original_type": "", "context": "",
             "timestamp": "2025-05-31T09:15:00.123456"}
        ],
        "replied_tweets": {"1001": {"reply_id": "", "timestamp": "2025-05-20T08:00:00"}},
        "content_themes": {"hiring": "2025-05-31T11:30:00"}
    }"#;
    fs::write(&path, legacy).unwrap();

    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));
    assert!(tracker.has_posted_similar_content(LESSON, ""));
    assert!(tracker.has_replied_to_tweet("1001"));
    assert!(!tracker.has_used_theme_recently("hiring", 6));

    let stats = tracker.get_statistics();
    assert_eq!(stats.posted_content, 1);
    assert_eq!(stats.content_themes, 0);
    assert_eq!(stats.email_content, 0);
}

#[test]
fn file_store_round_trips_category() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    let tracker = file_tracker(&path, Arc::new(ManualClock::new(start_time())));
    tracker.mark_content_posted("Breaking: startup raises Series B funding", "", "");

    let doc = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(doc.posted_content[0].category, ContentCategory::News);
}

#[test]
fn concurrent_marks_are_not_lost() {
    let h = harness();
    let tracker = Arc::new(h.tracker);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                for i in 0..25 {
                    tracker.mark_tweet_replied(&format!("{worker}-{i}"), "");
                    tracker.mark_theme_used(&format!("theme-{worker}-{i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = tracker.get_statistics();
    assert_eq!(stats.replied_tweets, 200);
    assert_eq!(stats.content_themes, 200);

    let saved = h.store.snapshot().expect("document saved");
    assert_eq!(saved.replied_tweets.len(), 200);
    assert_eq!(saved.content_themes.len(), 200);
}
