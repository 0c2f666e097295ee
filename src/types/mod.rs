pub mod identifiers;
pub mod record;
pub mod timestamp;

pub use identifiers::{RssFingerprint, FINGERPRINT_BUCKETS};
pub use record::{Collection, ContentCategory, ContentRecord, ReplyEntry};
pub use timestamp::Timestamp;
