use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// A candidate is a duplicate when its best cosine score is strictly above this.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    #[serde(default)]
    pub retention: RetentionConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            similarity_threshold: default_similarity_threshold(),
            max_features: default_max_features(),
            retention: RetentionConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Self>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Per-collection retention windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionConfig {
    #[serde(default = "default_posted_content_days")]
    pub posted_content_days: u32,
    #[serde(default = "default_email_content_days")]
    pub email_content_days: u32,
    #[serde(default = "default_replied_tweets_days")]
    pub replied_tweets_days: u32,
    #[serde(default = "default_used_rss_posts_days")]
    pub used_rss_posts_days: u32,
    #[serde(default = "default_content_themes_hours")]
    pub content_themes_hours: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            posted_content_days: default_posted_content_days(),
            email_content_days: default_email_content_days(),
            replied_tweets_days: default_replied_tweets_days(),
            used_rss_posts_days: default_used_rss_posts_days(),
            content_themes_hours: default_content_themes_hours(),
        }
    }
}

impl RetentionConfig {
    pub fn posted_content(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.posted_content_days))
    }

    pub fn email_content(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.email_content_days))
    }

    pub fn replied_tweets(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.replied_tweets_days))
    }

    pub fn used_rss_posts(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.used_rss_posts_days))
    }

    pub fn content_themes(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.content_themes_hours))
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("content_tracker_v2.json")
}

fn default_similarity_threshold() -> f64 {
    0.15
}

fn default_max_features() -> usize {
    1000
}

fn default_posted_content_days() -> u32 {
    30
}

fn default_email_content_days() -> u32 {
    14
}

fn default_replied_tweets_days() -> u32 {
    30
}

fn default_used_rss_posts_days() -> u32 {
    7
}

fn default_content_themes_hours() -> u32 {
    6
}
