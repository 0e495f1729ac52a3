// ABOUTME: Persistence layer storing the whole application state as one JSON blob
// ABOUTME: Pluggable key-value backends (file, in-memory) behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

/// File-backed key-value store
pub mod file;
/// In-memory key-value store
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use std::sync::Arc;

use tracing::{debug, info};

use crate::constants::storage::STATE_KEY;
use crate::errors::{AppError, AppResult};
use crate::models::AppState;

/// Blob store for opaque values
///
/// # Examples
///
/// ```rust,no_run
/// use caloriesnap::persistence::{InMemoryKeyValueStore, KeyValueStore};
/// # async fn example() -> Result<(), caloriesnap::errors::AppError> {
/// let store = InMemoryKeyValueStore::new();
/// store.put("greeting", b"hello".to_vec()).await?;
/// assert_eq!(store.get("greeting").await?, Some(b"hello".to_vec()));
/// store.remove("greeting").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn put(&self, key: &str, value: Vec<u8>) -> AppResult<()>;

    /// Delete the value under `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Loads and saves [`AppState`] under the fixed state key
#[derive(Clone)]
pub struct StateRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StateRepository {
    /// Repository over `store` using the default state key
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: STATE_KEY.to_owned(),
        }
    }

    /// Key the state blob lives under
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted state, or the empty state when nothing was saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the blob is not valid state JSON
    pub async fn load(&self) -> AppResult<AppState> {
        let Some(bytes) = self.store.get(&self.key).await? else {
            debug!(state.key = %self.key, "No saved state, starting fresh");
            return Ok(AppState::default());
        };

        let state: AppState = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::serialization(format!("Saved state under {} is malformed", self.key))
                .with_source(e)
        })?;
        info!(
            state.key = %self.key,
            state.days = state.daily_logs.len(),
            state.messages = state.chat_history.len(),
            state.has_profile = state.profile.is_some(),
            "Loaded saved state"
        );
        Ok(state)
    }

    /// Write `state` as the new blob
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    pub async fn save(&self, state: &AppState) -> AppResult<()> {
        let bytes = serde_json::to_vec(state)?;
        self.store.put(&self.key, bytes).await?;
        debug!(state.key = %self.key, "Saved state");
        Ok(())
    }

    /// Delete the saved state
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(&self.key).await
    }
}
