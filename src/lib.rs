// ABOUTME: Main library entry point for the fitlog fitness and nutrition journal
// ABOUTME: Persisted log store, session holder, journal operations, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog
//!
//! A local fitness and nutrition journal. Meals, workouts, weight check-ins,
//! body measurements and progress photos are kept as whole collections in a
//! key-value store; totals, streaks and progress are derived on demand by
//! `fitlog-intelligence`.
//!
//! ## Architecture
//!
//! - **Storage**: key-value backends (memory, file) and the typed [`storage::LogStore`]
//! - **Session**: the single logged-in [`fitlog_core::models::UserProfile`]
//! - **Journal**: validated entry creation over the store
//! - **Catalog**: built-in food suggestions and workout templates
//! - **Context**: [`context::AppContext`] wiring the pieces for one process
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog::config::ClientConfig;
//! use fitlog::context::AppContext;
//! use fitlog_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let ctx = AppContext::init(ClientConfig::from_env()?).await?;
//!     let entry = ctx.journal().record_weight("69,8").await?;
//!     println!("logged {} kg", entry.value);
//!     Ok(())
//! }
//! ```

/// Built-in food suggestions and workout templates
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application context created at startup
pub mod context;

/// Entry creation and reads over the persisted collections
pub mod journal;

/// Logging configuration and structured helpers
pub mod logging;

/// Logged-in user profile
pub mod session;

/// Key-value backends and the typed log store
pub mod storage;

pub use fitlog_core::errors::{AppError, AppResult, ErrorCode};
