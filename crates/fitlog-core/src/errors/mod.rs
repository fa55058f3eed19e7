// ABOUTME: Unified error type for storage, session, and input validation failures
// ABOUTME: Defines ErrorCode taxonomy, AppError with source chaining, and read-recovery policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] carries the propagation policy: corrupt or unreadable data is
//! recovered on the read path by substituting an empty collection, while
//! failed writes are surfaced so the caller can report that nothing was saved.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Session (1000-1999)
    /// Operation needs a logged-in profile
    AuthRequired = 1000,

    // Validation (3000-3999)
    /// Caller supplied a value that failed parse-and-check
    InvalidInput = 3000,

    // Resources (4000-4999)
    /// Referenced entry does not exist
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value is missing or out of range
    ConfigInvalid = 6000,

    // Storage (9000-9999)
    /// The key-value medium could not be read or written
    StorageUnavailable = 9000,
    /// A stored value does not have the expected shape
    CorruptData = 9001,
    /// A value could not be serialized for writing
    SerializationError = 9002,
    /// Unexpected internal failure
    InternalError = 9999,
}

impl ErrorCode {
    /// Stable machine-readable name (matches the serde representation)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::CorruptData => "CORRUPT_DATA",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "You need to be logged in to do this",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested entry was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageUnavailable => "Local storage is unavailable",
            Self::CorruptData => "Stored data is corrupted",
            Self::SerializationError => "Data could not be serialized",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether a read that failed with this code falls back to an empty result
    ///
    /// Reads fail open: a screen never crashes because storage is missing or
    /// holds garbage. Writes never use this fallback.
    #[must_use]
    pub const fn is_recoverable_on_read(&self) -> bool {
        matches!(self, Self::StorageUnavailable | Self::CorruptData)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Operation requires a logged-in profile
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "No user is logged in")
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Entry not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage medium unavailable
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageUnavailable, message)
    }

    /// Stored value failed shape validation
    pub fn corrupt_data(key: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::CorruptData,
            format!("value under '{key}': {}", message.into()),
        )
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether a read that failed with this error falls back to an empty result
    #[must_use]
    pub const fn is_recoverable_on_read(&self) -> bool {
        self.code.is_recoverable_on_read()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage_unavailable(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        // Syntax/data errors come from reading stored values; io errors from writers
        let code = if error.is_io() {
            ErrorCode::SerializationError
        } else {
            ErrorCode::CorruptData
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_recovery_policy() {
        assert!(ErrorCode::CorruptData.is_recoverable_on_read());
        assert!(ErrorCode::StorageUnavailable.is_recoverable_on_read());
        assert!(!ErrorCode::InvalidInput.is_recoverable_on_read());
        assert!(!ErrorCode::AuthRequired.is_recoverable_on_read());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::StorageUnavailable).unwrap();
        assert_eq!(json, "\"STORAGE_UNAVAILABLE\"");
        assert_eq!(ErrorCode::CorruptData.as_str(), "CORRUPT_DATA");
    }

    #[test]
    fn test_io_error_maps_to_storage_unavailable() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error = AppError::from(io_err);
        assert_eq!(error.code, ErrorCode::StorageUnavailable);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_json_error_maps_to_corrupt_data() {
        let parse_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let error = AppError::from(parse_err);
        assert_eq!(error.code, ErrorCode::CorruptData);
        assert!(error.to_string().starts_with("Stored data is corrupted"));
    }
}
