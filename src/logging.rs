// ABOUTME: Logging configuration and structured logging setup for the fitlog client
// ABOUTME: Configures log level, output format, and stderr output so stdout stays clean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use crate::config::Environment;
use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Full human readable output with targets
    Pretty,
    /// Single-line output (default for the CLI)
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact, // Default fallback (including "compact")
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Defaults for a deployment environment
    ///
    /// Production logs `JSON` with source locations; testing only reports errors.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self {
                format: LogFormat::Json,
                include_location: true,
                ..Self::default()
            }
        } else if environment.is_testing() {
            Self {
                level: "error".into(),
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Create logging configuration from `RUST_LOG` and `LOG_FORMAT`
    ///
    /// Unset variables fall back to the defaults of the environment named by
    /// `FITLOG_ENVIRONMENT`.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var(Environment::ENV_VAR)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();
        let defaults = Self::for_environment(environment);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map(|s| LogFormat::from_str_or_default(&s))
                .unwrap_or(defaults.format),
            include_location: defaults.include_location
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Raise the level to `debug` for this crate when `verbose` is set
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = "debug".into();
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level).add_directive(
            format!("fitlog={}", self.level)
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// Output goes to stderr; stdout is reserved for command results.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

        info!(
            log.level = %self.level,
            log.format = ?self.format,
            version = env!("CARGO_PKG_VERSION"),
            "fitlog starting"
        );
        Ok(())
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log session transitions
    pub fn log_auth_event(email: &str, event: &str, success: bool) {
        if success {
            info!(
                user.email = %email,
                auth.event = %event,
                auth.success = success,
                "Session event"
            );
        } else {
            warn!(
                user.email = %email,
                auth.event = %event,
                auth.success = success,
                "Session event failed"
            );
        }
    }

    /// Log a write that did not reach storage
    pub fn log_write_failure(collection: &str, error: &dyn std::error::Error) {
        warn!(
            store.collection = %collection,
            error = %error,
            "Entry was not saved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    }

    #[test]
    fn test_environment_defaults() {
        let production = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(production.format, LogFormat::Json);
        assert!(production.include_location);

        let testing = LoggingConfig::for_environment(Environment::Testing);
        assert_eq!(testing.level, "error");
        assert_eq!(testing.format, LogFormat::Compact);

        let development = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(development.level, "warn");
        assert!(!development.include_location);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose(true);
        assert_eq!(config.level, "debug");
        let config = LoggingConfig::default().verbose(false);
        assert_eq!(config.level, "warn");
    }
}
