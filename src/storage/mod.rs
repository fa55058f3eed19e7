// ABOUTME: Persisted log store over a pluggable key-value backend
// ABOUTME: Typed collection CRUD, versioned schema envelopes, and per-key write serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Persisted Log Store
//!
//! Collections (weights, meals, workouts, measurements, photos) and the single
//! `auth_user` profile live under named keys in a key-value backend. Every
//! read loads the whole collection; every write replaces it.
//!
//! Reads fail soft: an absent, corrupt, or unreadable value is returned as an
//! empty collection. Writes surface their errors so the caller knows the
//! change was not persisted.

/// Key-value backend selection
pub mod factory;
/// One JSON file per key on the local filesystem
pub mod file;
/// Typed collections over a backend
pub mod log_store;
/// In-memory backend for tests and ephemeral sessions
pub mod memory;
/// Versioned envelope and legacy migration
pub mod schema;

pub use factory::Storage;
pub use file::FileStore;
pub use log_store::LogStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use fitlog_core::constants::storage_keys;
use fitlog_core::errors::AppResult;
use std::fmt;

/// Minimal string key-value medium the log store persists into
///
/// Implementations only move opaque strings; shape validation and schema
/// migration happen in [`LogStore`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the medium cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the medium cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value stored under `key` (absent keys are not an error)
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the medium cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// List stored keys
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the medium cannot be read
    async fn keys(&self) -> AppResult<Vec<String>>;

    /// Verify the medium is usable
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend is not healthy
    async fn health_check(&self) -> AppResult<()>;

    /// Short backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// The list-typed collections persisted by the log store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Weight check-ins
    Weights,
    /// Logged meals
    Meals,
    /// Completed workouts
    Workouts,
    /// Body measurements
    Measurements,
    /// Progress photos
    Photos,
}

impl Collection {
    /// Every collection, in display order
    pub const ALL: [Self; 5] = [
        Self::Weights,
        Self::Meals,
        Self::Workouts,
        Self::Measurements,
        Self::Photos,
    ];

    /// Storage key the collection is persisted under
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weights => storage_keys::WEIGHTS,
            Self::Meals => storage_keys::MEALS,
            Self::Workouts => storage_keys::WORKOUTS,
            Self::Measurements => storage_keys::MEASUREMENTS,
            Self::Photos => storage_keys::PHOTOS,
        }
    }

    /// Collection stored under `key`, if any
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
