// ABOUTME: Environment configuration for the fitlog client
// ABOUTME: Parses storage backend, data directory, body and nutrition targets from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog_core::constants::body;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_intelligence::NutritionTargets;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment (default)
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Environment variable selecting the mode
    pub const ENV_VAR: &'static str = "FITLOG_ENVIRONMENT";

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback (including "development" | "dev")
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Key-value backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON document per key in the data directory (default)
    #[default]
    File,
    /// Process-local map, discarded on exit
    Memory,
}

impl StorageBackend {
    /// Environment variable selecting the backend
    pub const ENV_VAR: &'static str = "FITLOG_STORAGE";

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Self::Memory,
            _ => Self::File, // Default fallback (including "file")
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Where entries are persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variable overriding the data directory
    pub const DATA_DIR_ENV_VAR: &'static str = "FITLOG_DATA_DIR";

    /// Default data directory: the platform data dir plus `fitlog`
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir().map_or_else(
            || {
                warn!("No platform data directory, falling back to ./.fitlog");
                PathBuf::from(".fitlog")
            },
            |dir| dir.join("fitlog"),
        )
    }

    /// In-memory storage, used by tests and throwaway sessions
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::new(),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Deployment mode
    pub environment: Environment,
    /// Storage settings
    pub storage: StorageConfig,
    /// Goal body weight in kilograms
    pub target_weight_kg: f64,
    /// Daily calorie and macro targets
    pub nutrition_targets: NutritionTargets,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            storage: StorageConfig {
                backend: StorageBackend::default(),
                data_dir: StorageConfig::default_data_dir(),
            },
            target_weight_kg: body::DEFAULT_TARGET_WEIGHT_KG,
            nutrition_targets: NutritionTargets::default(),
        }
    }
}

/// Parse an optional numeric environment variable
fn env_f64(name: &str, default: f64) -> AppResult<f64> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|e| {
            AppError::config(format!("{name}='{raw}' is not a number: {e}"))
        }),
        Err(_) => Ok(default),
    }
}

impl ClientConfig {
    /// Environment variable for the goal weight
    pub const TARGET_WEIGHT_ENV_VAR: &'static str = "FITLOG_TARGET_WEIGHT_KG";
    /// Environment variable for the daily calorie target
    pub const TARGET_CALORIES_ENV_VAR: &'static str = "FITLOG_TARGET_CALORIES";
    /// Environment variable for the daily protein target
    pub const TARGET_PROTEIN_ENV_VAR: &'static str = "FITLOG_TARGET_PROTEIN";
    /// Environment variable for the daily carbohydrate target
    pub const TARGET_CARBS_ENV_VAR: &'static str = "FITLOG_TARGET_CARBS";
    /// Environment variable for the daily fat target
    pub const TARGET_FAT_ENV_VAR: &'static str = "FITLOG_TARGET_FAT";

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable does not parse or a
    /// value fails validation
    pub fn from_env() -> AppResult<Self> {
        let defaults = NutritionTargets::default();

        let environment = env::var(Environment::ENV_VAR)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();
        let backend = env::var(StorageBackend::ENV_VAR)
            .map(|s| StorageBackend::from_str_or_default(&s))
            .unwrap_or_default();
        let data_dir = env::var(StorageConfig::DATA_DIR_ENV_VAR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(StorageConfig::default_data_dir, PathBuf::from);

        let config = Self {
            environment,
            storage: StorageConfig { backend, data_dir },
            target_weight_kg: env_f64(
                Self::TARGET_WEIGHT_ENV_VAR,
                body::DEFAULT_TARGET_WEIGHT_KG,
            )?,
            nutrition_targets: NutritionTargets {
                calories: env_f64(Self::TARGET_CALORIES_ENV_VAR, defaults.calories)?,
                protein: env_f64(Self::TARGET_PROTEIN_ENV_VAR, defaults.protein)?,
                carbs: env_f64(Self::TARGET_CARBS_ENV_VAR, defaults.carbs)?,
                fat: env_f64(Self::TARGET_FAT_ENV_VAR, defaults.fat)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every target is a finite positive number
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first offending setting
    pub fn validate(&self) -> AppResult<()> {
        let targets = [
            (Self::TARGET_WEIGHT_ENV_VAR, self.target_weight_kg),
            (Self::TARGET_CALORIES_ENV_VAR, self.nutrition_targets.calories),
            (Self::TARGET_PROTEIN_ENV_VAR, self.nutrition_targets.protein),
            (Self::TARGET_CARBS_ENV_VAR, self.nutrition_targets.carbs),
            (Self::TARGET_FAT_ENV_VAR, self.nutrition_targets.fat),
        ];
        for (name, value) in targets {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(AppError::config("file storage requires a data directory"));
        }
        Ok(())
    }

    /// Use `dir` for file storage
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = dir.into();
        self
    }

    /// Switch to in-memory storage
    #[must_use]
    pub fn with_memory_storage(mut self) -> Self {
        self.storage.backend = StorageBackend::Memory;
        self
    }

    /// Log a one-line summary of the effective settings
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            storage = %self.storage.backend,
            data_dir = %self.storage.data_dir.display(),
            target_weight_kg = self.target_weight_kg,
            target_calories = self.nutrition_targets.calories,
            "Configuration loaded"
        );
    }
}
