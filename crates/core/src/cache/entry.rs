//! Versioned cache entries and the validity rule shared by both tiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CacheConfig;

/// A cached payload with its creation time and the version tag active then.
///
/// Entries are never mutated; a later write to the same key replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Creation instant, persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, version: impl Into<String>) -> Self {
        Self { data, timestamp: Utc::now(), version: version.into() }
    }

    /// Valid iff caching is enabled, the version matches, and the entry is
    /// younger than the TTL at `now`.
    pub fn is_valid_at(&self, config: &CacheConfig, current_version: &str, now: DateTime<Utc>) -> bool {
        if !config.is_enabled() || self.version != current_version {
            return false;
        }

        let ttl_ms = i64::try_from(config.ttl_ms).unwrap_or(i64::MAX);
        let age_ms = now.signed_duration_since(self.timestamp).num_milliseconds();
        age_ms < ttl_ms
    }

    pub fn is_valid(&self, config: &CacheConfig, current_version: &str) -> bool {
        self.is_valid_at(config, current_version, Utc::now())
    }
}
