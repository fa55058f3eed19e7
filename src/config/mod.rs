// ABOUTME: Configuration module for the fitlog client
// ABOUTME: Environment-driven settings for storage, targets, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables with defaults suitable for a
//! single local user. Command-line flags override them after loading.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{ClientConfig, Environment, StorageBackend, StorageConfig};
