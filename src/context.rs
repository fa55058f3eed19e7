// ABOUTME: Explicit application context wiring storage, session, and journal together
// ABOUTME: Built once at startup and passed to every command instead of global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use crate::journal::Journal;
use crate::session::Session;
use crate::storage::{KeyValueStore, LogStore, Storage};
use fitlog_core::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Everything a command needs, created by [`AppContext::init`]
///
/// There is no teardown step; dropping the context is enough.
#[derive(Clone)]
pub struct AppContext {
    config: Arc<ClientConfig>,
    store: LogStore,
    session: Arc<Session>,
    journal: Journal,
}

impl AppContext {
    /// Open the configured storage and restore the session from it
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation, or
    /// `StorageUnavailable` if the backend fails its health check
    pub async fn init(config: ClientConfig) -> AppResult<Self> {
        config.validate()?;
        let storage = Storage::from_config(&config.storage).await?;
        info!(backend = %storage.backend_info().await, "Storage ready");
        Ok(Self::with_backend(config, Arc::new(storage)).await)
    }

    /// Build a context over an existing backend
    pub async fn with_backend(config: ClientConfig, backend: Arc<dyn KeyValueStore>) -> Self {
        let store = LogStore::new(backend);
        let session = Arc::new(Session::restore(store.clone()).await);
        let journal = Journal::new(store.clone());
        Self {
            config: Arc::new(config),
            store,
            session,
            journal,
        }
    }

    /// Effective configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Typed collection store
    #[must_use]
    pub const fn store(&self) -> &LogStore {
        &self.store
    }

    /// Current user session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Entry operations
    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }
}
