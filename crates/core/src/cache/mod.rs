//! Two-tier cache for documentation records.
//!
//! An in-process map fronts an optional directory holding one JSON file per
//! key. It supports:
//!
//! - TTL expiry, with a TTL of `0` disabling caching outright
//! - Version-tag invalidation after a documentation source upgrade
//! - Promotion of valid disk entries into memory on read
//! - Collision-resistant key to filename mapping
//!
//! Read and write failures never reach the caller: a bad or missing file is a
//! miss, and a failed disk write leaves the memory write in place.

pub mod entry;
pub mod file;
pub mod hash;
pub mod store;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use entry::CacheEntry;
pub use hash::{compute_cache_key, file_name_for_key};
pub use store::CacheStore;

/// Where cache entries are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// In-process map only; entries are lost on restart.
    Memory,
    /// In-process map backed by one file per key.
    #[default]
    File,
}

/// Per-call cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Entry lifetime in milliseconds; `0` disables caching.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    #[serde(default)]
    pub storage: StorageMode,
}

fn default_ttl_ms() -> u64 {
    24 * 60 * 60 * 1000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_ms: default_ttl_ms(), storage: StorageMode::default() }
    }
}

impl CacheConfig {
    pub fn is_enabled(&self) -> bool {
        self.ttl_ms != 0
    }

    pub fn memory_only(ttl_ms: u64) -> Self {
        Self { ttl_ms, storage: StorageMode::Memory }
    }

    pub fn with_files(ttl_ms: u64) -> Self {
        Self { ttl_ms, storage: StorageMode::File }
    }
}

/// Failures inside the cache tiers. Logged and recovered, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache io error at {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("corrupt cache entry at {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to serialize cache entry: {0}")]
    Serialize(serde_json::Error),
}
