//! Durable tier: one JSON file per cache key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CacheEntry, CacheError, file_name_for_key};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Directory-backed entry storage.
#[derive(Debug, Clone)]
pub struct FileTier {
    dir: PathBuf,
}

impl FileTier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name_for_key(key))
    }

    /// Read the entry for `key`. A missing file is `Ok(None)`.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<CacheEntry<T>>, CacheError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CacheError::Parse { path, source })
    }

    /// Replace the entry for `key`, creating the directory if needed.
    ///
    /// The entry is written to a sibling temp file and renamed over the target,
    /// so readers see either the old or the new entry in full.
    pub async fn write<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec_pretty(entry).map_err(CacheError::Serialize)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| CacheError::Io { path: self.dir.clone(), source })?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            file_name_for_key(key),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(source) = tokio::fs::write(&tmp, &bytes).await {
            return Err(CacheError::Io { path: tmp, source });
        }

        if let Err(source) = tokio::fs::rename(&tmp, &path).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(CacheError::Io { path, source });
        }

        Ok(())
    }

    /// Delete the file for `key`. Returns whether a file was removed.
    pub async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }

    /// Delete every file in the directory. Returns the number removed.
    pub async fn clear(&self) -> Result<usize, CacheError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(CacheError::Io { path: self.dir.clone(), source }),
        };

        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| CacheError::Io { path: self.dir.clone(), source })?
        {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map_err(|source| CacheError::Io { path: path.clone(), source })?
                .is_file();
            if !is_file {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => return Err(CacheError::Io { path, source }),
            }
        }

        Ok(removed)
    }
}
