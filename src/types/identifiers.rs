use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of buckets a content hash is folded into.
pub const FINGERPRINT_BUCKETS: u64 = 10_000_000;

/// Membership key for an RSS entry: `username:bucket`.
///
/// The bucket is a lossy 7-digit hash of the content. Two different entries
/// from the same source can collide; the cost is one skipped inspiration,
/// which is accepted in exchange for never storing the full text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RssFingerprint(String);

impl RssFingerprint {
    pub fn new(username: &str, content: &str) -> Self {
        RssFingerprint(format!("{username}:{}", stable_bucket(content)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// First 8 bytes of SHA-256, big-endian, folded into `FINGERPRINT_BUCKETS`.
fn stable_bucket(content: &str) -> u64 {
    let digest = Sha256::digest(content.as_bytes());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);

    u64::from_be_bytes(prefix) % FINGERPRINT_BUCKETS
}
