//! The two-tier cache store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::file::FileTier;
use super::{CacheConfig, CacheEntry, StorageMode};

/// In-process map fronting an optional per-key file directory.
///
/// Each store is an explicit instance; the documentation service owns one for
/// the life of the process and tests build isolated ones.
#[derive(Debug)]
pub struct CacheStore<T> {
    memory: RwLock<HashMap<String, CacheEntry<T>>>,
    files: FileTier,
}

impl<T> CacheStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Create an empty store whose file tier lives in `dir`.
    ///
    /// The directory is only touched when a config with file storage is used.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { memory: RwLock::new(HashMap::new()), files: FileTier::new(dir) }
    }

    pub fn dir(&self) -> &Path {
        self.files.dir()
    }

    /// Look up `key`, checking memory first and then disk.
    ///
    /// A valid disk entry is promoted into memory before it is returned.
    /// Missing, corrupt, stale, or version-mismatched entries are misses.
    pub async fn get(&self, key: &str, config: &CacheConfig, current_version: &str) -> Option<T> {
        if !config.is_enabled() {
            return None;
        }

        {
            let memory = self.memory.read().await;
            if let Some(entry) = memory.get(key)
                && entry.is_valid(config, current_version)
            {
                tracing::debug!(key, "memory cache hit");
                return Some(entry.data.clone());
            }
        }

        if config.storage != StorageMode::File {
            return None;
        }

        match self.files.read::<T>(key).await {
            Ok(Some(entry)) if entry.is_valid(config, current_version) => {
                tracing::debug!(key, "file cache hit, promoting to memory");
                let data = entry.data.clone();
                self.memory.write().await.insert(key.to_string(), entry);
                Some(data)
            }
            Ok(Some(entry)) => {
                tracing::debug!(key, entry_version = %entry.version, current_version, "file cache entry stale");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Store `value` under `key`, tagged with `version`.
    ///
    /// The memory write always happens; a failed file write is logged only.
    pub async fn set(&self, key: &str, value: T, config: &CacheConfig, version: &str) {
        let entry = CacheEntry::new(value, version);

        self.memory.write().await.insert(key.to_string(), entry.clone());

        if config.storage == StorageMode::File
            && let Err(e) = self.files.write(key, &entry).await
        {
            tracing::warn!(key, error = %e, "cache write failed, keeping memory entry");
        }
    }

    /// Remove `key` from memory and, with file storage, from disk.
    pub async fn clear(&self, key: &str, config: &CacheConfig) {
        self.memory.write().await.remove(key);

        if config.storage == StorageMode::File
            && let Err(e) = self.files.remove(key).await
        {
            tracing::warn!(key, error = %e, "failed to delete cache file");
        }
    }

    /// Empty memory and, with file storage, delete every file in the directory.
    pub async fn clear_all(&self, config: &CacheConfig) {
        self.memory.write().await.clear();

        if config.storage == StorageMode::File {
            match self.files.clear().await {
                Ok(removed) => tracing::debug!(removed, dir = %self.dir().display(), "cleared cache directory"),
                Err(e) => tracing::warn!(error = %e, "failed to clear cache directory"),
            }
        }
    }

    /// Drop the in-process tier only, as a fresh process would see it.
    pub async fn evict_memory(&self) {
        self.memory.write().await.clear();
    }

    /// Number of entries currently held in memory.
    pub async fn memory_len(&self) -> usize {
        self.memory.read().await.len()
    }
}
