// ABOUTME: Core types and constants for the fitlog fitness and nutrition tracker
// ABOUTME: Foundation crate with error handling, entities, storage keys, and id generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Core
//!
//! Shared types for the fitlog client. This crate changes rarely so the
//! storage and aggregation crates can compile against a stable foundation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, profile defaults, and daily targets
//! - **models**: Persisted entities (weights, meals, workouts, measurements, photos, profile)
//! - **ids**: Monotonic timestamp identifiers for new entries

/// Unified error handling with the storage/input error taxonomy
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Persisted entity definitions
pub mod models;

/// Entry identifier generation
pub mod ids;
