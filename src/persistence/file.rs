// ABOUTME: File-backed key-value store writing one file per key under a data directory
// ABOUTME: Writes go to a temporary sibling file that is renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::KeyValueStore;
use crate::constants::storage::BLOB_EXTENSION;
use crate::errors::{AppError, AppResult};

/// Blob store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the value for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if `key` could escape the data directory
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::invalid_input(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.{BLOB_EXTENSION}")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}", self.root.display())).with_source(e)
        })?;

        let tmp = path.with_extension(format!("{BLOB_EXTENSION}.tmp"));
        fs::write(&tmp, &value).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote blob");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove {}", path.display()))
                .with_source(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_rejects_traversal() {
        let store = FileKeyValueStore::new("/tmp/data");
        assert!(store.path_for("../etc/passwd").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for(".hidden").is_err());
        assert_eq!(
            store.path_for("caloriesnap_data_v2").unwrap(),
            PathBuf::from("/tmp/data/caloriesnap_data_v2.json")
        );
    }
}
