// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides stores, a failure-injecting backend, entry builders, and contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitlog`

use async_trait::async_trait;
use chrono::NaiveDate;
use fitlog::config::{ClientConfig, Environment, StorageConfig};
use fitlog::context::AppContext;
use fitlog::storage::{InMemoryStore, KeyValueStore, LogStore};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{MealEntry, MealSlot};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Backend that can be told to fail reads or writes
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw value stored under `key`, bypassing failure injection
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }

    /// Store a raw value, bypassing failure injection
    pub async fn put_raw(&self, key: &str, value: &str) {
        self.inner.set(key, value).await.unwrap();
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::storage_unavailable("injected read failure"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage_unavailable("injected write failure"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage_unavailable("injected write failure"));
        }
        self.inner.remove(key).await
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

/// Log store over a fresh in-memory backend
pub fn memory_store() -> LogStore {
    init_test_logging();
    LogStore::new(Arc::new(InMemoryStore::new()))
}

/// Log store over a failure-injecting backend, plus a handle to that backend
pub fn flaky_store() -> (LogStore, FlakyStore) {
    init_test_logging();
    let backend = FlakyStore::new();
    (LogStore::new(Arc::new(backend.clone())), backend)
}

/// Configuration for tests: in-memory storage and default targets
pub fn test_config() -> ClientConfig {
    ClientConfig {
        environment: Environment::Testing,
        storage: StorageConfig::memory(),
        ..ClientConfig::default()
    }
}

/// Context over a fresh in-memory backend
pub async fn test_context() -> AppContext {
    init_test_logging();
    AppContext::with_backend(test_config(), Arc::new(InMemoryStore::new())).await
}

pub fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap()
}

/// Meal entry with the given calories and quantity; macros are fixed
pub fn meal(id: i64, calories: f64, quantity: f64, date: NaiveDate) -> MealEntry {
    MealEntry {
        id,
        name: format!("meal {id}"),
        calories,
        protein: 10.0,
        carbs: 20.0,
        fat: 5.0,
        category: Some(MealSlot::Lunch),
        slot: MealSlot::Lunch,
        time: "12:30".to_owned(),
        quantity,
        date,
    }
}
