// ABOUTME: Typed collection store over a key-value backend
// ABOUTME: Fail-soft reads, surfaced write errors, and per-key serialized read-modify-write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{schema, Collection, KeyValueStore};
use dashmap::DashMap;
use fitlog_core::errors::{AppError, AppResult, ErrorCode};
use fitlog_core::models::LogEntry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Typed access to the persisted collections
///
/// Every mutation of a key runs under that key's async mutex, so two
/// concurrent appends to the same collection both land.
#[derive(Clone)]
pub struct LogStore {
    backend: Arc<dyn KeyValueStore>,
    write_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl LogStore {
    /// Create a log store persisting into `backend`
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            write_locks: Arc::new(DashMap::new()),
        }
    }

    /// Name of the underlying backend
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Load a collection, reporting why it could not be read
    ///
    /// Entries that violate their invariants (a meal with a non-positive
    /// quantity) are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend cannot be read, or
    /// `CorruptData` if the stored value has the wrong shape
    pub async fn try_load<T: LogEntry>(&self) -> AppResult<Vec<T>> {
        let Some(data) = self.read_payload(T::KEY).await? else {
            return Ok(Vec::new());
        };
        let entries: Vec<T> = serde_json::from_value(data)
            .map_err(|e| AppError::corrupt_data(T::KEY, e.to_string()).with_source(e))?;

        let total = entries.len();
        let entries: Vec<T> = entries.into_iter().filter(T::is_storable).collect();
        if entries.len() < total {
            debug!(
                key = T::KEY,
                skipped = total - entries.len(),
                "Skipped stored entries violating invariants"
            );
        }
        Ok(entries)
    }

    /// Load a collection, treating any read failure as empty
    pub async fn load<T: LogEntry>(&self) -> Vec<T> {
        match self.try_load().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = T::KEY, error = %e, "Failed to load collection, using empty");
                Vec::new()
            }
        }
    }

    /// Replace a collection
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails
    pub async fn save<T: LogEntry>(&self, entries: &[T]) -> AppResult<()> {
        let lock = self.write_lock(T::KEY);
        let _guard = lock.lock().await;
        self.write_entries(entries).await
    }

    /// Add `entry` to the end of its collection
    ///
    /// An entry that may not be stored (a meal with quantity <= 0) instead
    /// removes any stored entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the collection cannot be read or written
    pub async fn append<T: LogEntry>(&self, entry: T) -> AppResult<()> {
        self.update(move |entries: &mut Vec<T>| {
            if entry.is_storable() {
                entries.push(entry);
            } else if let Some(id) = entry.entry_id() {
                entries.retain(|existing| existing.entry_id() != Some(id));
            }
            Ok(())
        })
        .await
    }

    /// Read-modify-write a collection under its key lock
    ///
    /// A stored value that is corrupt is discarded and `apply` sees an empty
    /// collection. A backend that cannot be read aborts the update so existing
    /// history is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns the error from `apply`, or the backend's error if the
    /// collection cannot be read or written
    pub async fn update<T, R, F>(&self, apply: F) -> AppResult<R>
    where
        T: LogEntry,
        F: FnOnce(&mut Vec<T>) -> AppResult<R> + Send,
        R: Send,
    {
        let lock = self.write_lock(T::KEY);
        let _guard = lock.lock().await;

        let mut entries = match self.try_load::<T>().await {
            Ok(entries) => entries,
            Err(e) if e.code == ErrorCode::CorruptData => {
                warn!(key = T::KEY, error = %e, "Discarding corrupt collection");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let result = apply(&mut entries)?;
        self.write_entries(&entries).await?;
        Ok(result)
    }

    /// Load a single stored value, reporting why it could not be read
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` or `CorruptData` as for [`Self::try_load`]
    pub async fn try_load_value<V: DeserializeOwned>(&self, key: &str) -> AppResult<Option<V>> {
        let Some(data) = self.read_payload(key).await? else {
            return Ok(None);
        };
        if data.is_null() {
            return Ok(None);
        }
        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| AppError::corrupt_data(key, e.to_string()).with_source(e))
    }

    /// Load a single stored value, treating any read failure as absent
    pub async fn load_value<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        match self.try_load_value(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Failed to load value, treating as absent");
                None
            }
        }
    }

    /// Store a single value
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails
    pub async fn save_value<V: Serialize + Sync>(&self, key: &str, value: &V) -> AppResult<()> {
        let lock = self.write_lock(key);
        let _guard = lock.lock().await;
        let encoded = schema::encode(value)?;
        self.backend.set(key, &encoded).await?;
        debug!(key = key, "Value saved");
        Ok(())
    }

    /// Delete whatever is stored under `key`
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the delete fails
    pub async fn remove(&self, key: &str) -> AppResult<()> {
        let lock = self.write_lock(key);
        let _guard = lock.lock().await;
        self.backend.remove(key).await?;
        debug!(key = key, "Value removed");
        Ok(())
    }

    /// Collections that currently have a stored value
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend cannot be listed
    pub async fn stored_collections(&self) -> AppResult<Vec<Collection>> {
        let keys = self.backend.keys().await?;
        Ok(Collection::ALL
            .into_iter()
            .filter(|c| keys.iter().any(|k| k == c.key()))
            .collect())
    }

    fn write_lock(&self, key: &str) -> Arc<Mutex<()>> {
        self.write_locks
            .entry(key.to_owned())
            .or_default()
            .value()
            .clone()
    }

    async fn read_payload(&self, key: &str) -> AppResult<Option<serde_json::Value>> {
        match self.backend.get(key).await? {
            Some(raw) => schema::decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    async fn write_entries<T: LogEntry>(&self, entries: &[T]) -> AppResult<()> {
        let storable: Vec<&T> = entries.iter().filter(|e| e.is_storable()).collect();
        let encoded = schema::encode(&storable)?;
        self.backend.set(T::KEY, &encoded).await?;
        debug!(key = T::KEY, count = storable.len(), "Collection saved");
        Ok(())
    }
}
