// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Defaults, overrides, parse failures, and validation of targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitlog::config::{ClientConfig, Environment, StorageBackend};
use fitlog::context::AppContext;
use fitlog_core::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: [&str; 8] = [
    "FITLOG_STORAGE",
    "FITLOG_DATA_DIR",
    "FITLOG_ENVIRONMENT",
    "FITLOG_TARGET_WEIGHT_KG",
    "FITLOG_TARGET_CALORIES",
    "FITLOG_TARGET_PROTEIN",
    "FITLOG_TARGET_CARBS",
    "FITLOG_TARGET_FAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_storage_backend_parsing() {
    assert_eq!(
        StorageBackend::from_str_or_default("memory"),
        StorageBackend::Memory
    );
    assert_eq!(
        StorageBackend::from_str_or_default("FILE"),
        StorageBackend::File
    );
    assert_eq!(
        StorageBackend::from_str_or_default("bogus"),
        StorageBackend::File
    ); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("prod"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert!(config.storage.data_dir.ends_with("fitlog") || config.storage.data_dir.ends_with(".fitlog"));
    assert!((config.target_weight_kg - 65.0).abs() < f64::EPSILON);
    assert!((config.nutrition_targets.calories - 1500.0).abs() < f64::EPSILON);
    assert!((config.nutrition_targets.protein - 120.0).abs() < f64::EPSILON);
    assert!((config.nutrition_targets.carbs - 150.0).abs() < f64::EPSILON);
    assert!((config.nutrition_targets.fat - 50.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("FITLOG_STORAGE", "memory");
    env::set_var("FITLOG_DATA_DIR", "/tmp/fitlog-test-data");
    env::set_var("FITLOG_ENVIRONMENT", "production");
    env::set_var("FITLOG_TARGET_WEIGHT_KG", "70.5");
    env::set_var("FITLOG_TARGET_CALORIES", "2000");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(
        config.storage.data_dir,
        PathBuf::from("/tmp/fitlog-test-data")
    );
    assert!(config.environment.is_production());
    assert!((config.target_weight_kg - 70.5).abs() < f64::EPSILON);
    assert!((config.nutrition_targets.calories - 2000.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_number_is_config_error() {
    clear_env();
    env::set_var("FITLOG_TARGET_PROTEIN", "lots");
    let err = ClientConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("FITLOG_TARGET_PROTEIN"));
    clear_env();
}

#[test]
#[serial]
fn test_non_positive_target_is_rejected() {
    clear_env();
    env::set_var("FITLOG_TARGET_CALORIES", "0");
    let err = ClientConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
fn test_validate_rejects_non_finite() {
    let mut config = common::test_config();
    config.target_weight_kg = f64::NAN;
    assert_eq!(config.validate().unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[tokio::test]
async fn test_context_init_with_file_storage() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::default().with_data_dir(dir.path());
    let ctx = AppContext::init(config).await.unwrap();
    assert_eq!(ctx.store().backend_name(), "file");

    ctx.journal().record_weight("71").await.unwrap();
    assert!(dir.path().join("weights.json").exists());
}

#[tokio::test]
async fn test_context_init_with_memory_storage() {
    let ctx = AppContext::init(common::test_config()).await.unwrap();
    assert_eq!(ctx.store().backend_name(), "memory");
    assert!(!ctx.session().is_logged_in().await);
}
