pub mod backend;
pub mod document;
pub mod retention;

pub use backend::{JsonFileStore, MemoryStore, StoreError, TrackerStore};
pub use document::TrackerDocument;
pub use retention::{PruneReport, RetentionPolicy};
