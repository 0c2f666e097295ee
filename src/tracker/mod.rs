pub mod statistics;
pub mod tracker;

pub use statistics::{DuplicateCheck, TrackerStatistics};
pub use tracker::ContentTracker;
