// ABOUTME: Storage factory selecting the key-value backend from configuration
// ABOUTME: Wraps the memory and file backends behind one enum implementing KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::file::FileStore;
use super::memory::InMemoryStore;
use super::KeyValueStore;
use crate::config::environment::{StorageBackend, StorageConfig};
use async_trait::async_trait;
use fitlog_core::errors::AppResult;
use tracing::info;

/// Key-value backend chosen at startup
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map; nothing survives exit
    Memory(InMemoryStore),
    /// One JSON document per key under a data directory
    File(FileStore),
}

impl Storage {
    /// Build the backend described by `config` and verify it is usable
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend fails its health check
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let storage = match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory storage");
                Self::Memory(InMemoryStore::new())
            }
            StorageBackend::File => {
                info!(
                    data_dir = %config.data_dir.display(),
                    "Initializing file storage"
                );
                Self::File(FileStore::new(config.data_dir.clone()))
            }
        };
        storage.health_check().await?;
        Ok(storage)
    }

    /// Human-readable description of the active backend
    pub async fn backend_info(&self) -> String {
        match self {
            Self::Memory(store) => format!("memory ({} keys)", store.len().await),
            Self::File(store) => format!("file ({})", store.root().display()),
        }
    }
}

#[async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        match self {
            Self::Memory(store) => store.keys().await,
            Self::File(store) => store.keys().await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.health_check().await,
            Self::File(store) => store.health_check().await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(store) => store.backend_name(),
            Self::File(store) => store.backend_name(),
        }
    }
}
