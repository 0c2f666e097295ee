use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ISO-8601 instant as stored in the tracker document.
///
/// Written as RFC 3339 in UTC. Reading also accepts naive timestamps
/// without an offset, as older documents stored them; those are host local
/// time and are converted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Timestamp(at)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Time elapsed between this instant and `now`.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.0
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(Timestamp(at.with_timezone(&Utc)));
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        // Skipped local times (DST gaps) fall back to reading as UTC.
        let at = naive
            .and_local_timezone(Local)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc());
        Some(Timestamp(at))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {raw}")))
    }
}
