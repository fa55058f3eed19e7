// ABOUTME: Integration tests for the persisted log store and its backends
// ABOUTME: Fail-soft reads, surfaced write errors, schema migration, and serialized appends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{day, flaky_store, meal, memory_store};
use fitlog::storage::{Collection, FileStore, KeyValueStore, LogStore};
use fitlog_core::constants::storage_keys;
use fitlog_core::errors::ErrorCode;
use fitlog_core::models::{MealEntry, UserProfile, WeightEntry, WorkoutEntry};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_absent_collection_loads_empty() {
    let store = memory_store();
    let meals: Vec<MealEntry> = store.load().await;
    assert!(meals.is_empty());
    assert!(store.try_load::<WeightEntry>().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_meal_round_trip_preserves_fields() -> Result<()> {
    let store = memory_store();
    let original = meal(1_709_553_600_000, 380.0, 1.5, day(2024, 3, 4));
    store.append(original.clone()).await?;

    let loaded: Vec<MealEntry> = store.load().await;
    assert_eq!(loaded, vec![original]);
    Ok(())
}

#[tokio::test]
async fn test_save_of_load_is_idempotent() -> Result<()> {
    let store = memory_store();
    store
        .save(&[
            meal(1, 100.0, 1.0, day(2024, 3, 4)),
            meal(2, 250.0, 2.0, day(2024, 3, 5)),
        ])
        .await?;

    let first: Vec<MealEntry> = store.load().await;
    store.save(&first).await?;
    let second: Vec<MealEntry> = store.load().await;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_zero_quantity_append_removes_entry() -> Result<()> {
    let store = memory_store();
    store.append(meal(1, 100.0, 1.0, day(2024, 3, 4))).await?;
    store.append(meal(2, 200.0, 1.0, day(2024, 3, 4))).await?;

    store.append(meal(1, 100.0, 0.0, day(2024, 3, 4))).await?;

    let meals: Vec<MealEntry> = store.load().await;
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, 2);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_value_reads_empty_and_is_replaced_on_write() -> Result<()> {
    let (store, backend) = flaky_store();
    backend.put_raw(storage_keys::MEALS, "{definitely not json").await;

    let meals: Vec<MealEntry> = store.load().await;
    assert!(meals.is_empty());
    let err = store.try_load::<MealEntry>().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CorruptData);

    store.append(meal(7, 120.0, 1.0, day(2024, 3, 4))).await?;
    let meals: Vec<MealEntry> = store.load().await;
    assert_eq!(meals.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_wrong_shape_is_corrupt() {
    let (store, backend) = flaky_store();
    backend
        .put_raw(storage_keys::WEIGHTS, r#"{"schema_version":1,"data":{"value":3}}"#)
        .await;
    let err = store.try_load::<WeightEntry>().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CorruptData);
}

#[tokio::test]
async fn test_unavailable_read_fails_soft() {
    let (store, backend) = flaky_store();
    backend.fail_reads(true);
    let weights: Vec<WeightEntry> = store.load().await;
    assert!(weights.is_empty());
}

#[tokio::test]
async fn test_append_does_not_overwrite_unreadable_history() -> Result<()> {
    let (store, backend) = flaky_store();
    store.append(meal(1, 100.0, 1.0, day(2024, 3, 4))).await?;

    backend.fail_reads(true);
    let err = store
        .append(meal(2, 100.0, 1.0, day(2024, 3, 4)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageUnavailable);

    backend.fail_reads(false);
    let meals: Vec<MealEntry> = store.load().await;
    assert_eq!(meals.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_write_failure_is_surfaced() -> Result<()> {
    let (store, backend) = flaky_store();
    store.append(meal(1, 100.0, 1.0, day(2024, 3, 4))).await?;

    backend.fail_writes(true);
    let err = store
        .append(meal(2, 100.0, 1.0, day(2024, 3, 4)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageUnavailable);

    backend.fail_writes(false);
    let meals: Vec<MealEntry> = store.load().await;
    assert_eq!(meals.len(), 1, "failed append must not be persisted");
    Ok(())
}

#[tokio::test]
async fn test_saves_write_current_schema_envelope() -> Result<()> {
    let (store, backend) = flaky_store();
    store.append(meal(1, 100.0, 1.0, day(2024, 3, 4))).await?;

    let raw = backend.raw(storage_keys::MEALS).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["data"][0]["type"], "lunch");
    assert_eq!(value["data"][0]["date"], "2024-03-04");
    Ok(())
}

#[tokio::test]
async fn test_legacy_meals_are_migrated() {
    let (store, backend) = flaky_store();
    // Bare array as written before the envelope; id 1709553600000 is 2024-03-04T12:00:00Z
    backend
        .put_raw(
            storage_keys::MEALS,
            r#"[
                {"id":1709553600000,"name":"Tuna wrap","calories":380,"protein":25,"carbs":32,"fat":15,"category":"lunch","type":"lunch","time":"12:30"},
                {"id":1709553700000,"name":"Almonds","calories":170,"protein":null,"type":"snack","time":"16:00","quantity":2,"date":"2024-03-05"},
                {"name":"No id or date","calories":50,"type":"snack"}
            ]"#,
        )
        .await;

    let meals: Vec<MealEntry> = store.try_load().await.unwrap();
    assert_eq!(meals.len(), 2);

    assert_eq!(meals[0].date, day(2024, 3, 4));
    assert!((meals[0].quantity - 1.0).abs() < f64::EPSILON);

    assert_eq!(meals[1].date, day(2024, 3, 5));
    assert!(meals[1].protein.abs() < f64::EPSILON);
    assert!((meals[1].quantity - 2.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_null_workout_amounts_keep_history_on_append() -> Result<()> {
    let (store, backend) = flaky_store();
    // Custom workouts with unparseable minutes were written with null amounts
    backend
        .put_raw(
            storage_keys::WORKOUTS,
            r#"[
                {"id":1709553600000,"name":"Morning Cardio Blast","duration":30,"calories":300,"type":"cardio","date":"2024-03-04","completed":true},
                {"id":1709553700000,"name":"Stairs","duration":null,"calories":null,"type":"custom","date":"2024-03-04","completed":true}
            ]"#,
        )
        .await;

    let legacy: Vec<WorkoutEntry> = store.try_load().await?;
    assert_eq!(legacy.len(), 2);
    assert_eq!(legacy[1].duration, 0);
    assert!(legacy[1].calories.abs() < f64::EPSILON);

    let run = WorkoutEntry {
        id: 1_709_553_800_000,
        name: "Run".into(),
        duration: 10,
        calories: 80.0,
        category: "custom".into(),
        date: day(2024, 3, 5),
        completed: true,
    };
    store.append(run).await?;

    let workouts: Vec<WorkoutEntry> = store.try_load().await?;
    let names: Vec<&str> = workouts.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Morning Cardio Blast", "Stairs", "Run"]);
    Ok(())
}

#[tokio::test]
async fn test_newer_schema_version_reads_empty() {
    let (store, backend) = flaky_store();
    backend
        .put_raw(storage_keys::WORKOUTS, r#"{"schema_version":99,"data":[]}"#)
        .await;
    let err = store.try_load::<WorkoutEntry>().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CorruptData);
    assert!(store.load::<WorkoutEntry>().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_appends_are_serialized() -> Result<()> {
    let store = memory_store();
    let mut handles = Vec::new();
    for id in 1..=25 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append(meal(id, 100.0, 1.0, day(2024, 3, 4))).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let meals: Vec<MealEntry> = store.load().await;
    assert_eq!(meals.len(), 25);
    Ok(())
}

#[tokio::test]
async fn test_singleton_value_round_trip() -> Result<()> {
    let store = memory_store();
    let profile = UserProfile::with_defaults("Alice", "alice@example.com", day(2024, 1, 15));
    store.save_value(storage_keys::AUTH_USER, &profile).await?;

    let loaded: Option<UserProfile> = store.load_value(storage_keys::AUTH_USER).await;
    assert_eq!(loaded, Some(profile));

    store.remove(storage_keys::AUTH_USER).await?;
    let loaded: Option<UserProfile> = store.load_value(storage_keys::AUTH_USER).await;
    assert!(loaded.is_none());
    Ok(())
}

#[tokio::test]
async fn test_file_store_persists_across_instances() -> Result<()> {
    let dir = TempDir::new()?;
    let first = LogStore::new(Arc::new(FileStore::new(dir.path())));
    first.append(meal(1, 100.0, 1.0, day(2024, 3, 4))).await?;
    first
        .append(WeightEntry::new(chrono::Utc::now(), 72.5))
        .await?;

    let second = LogStore::new(Arc::new(FileStore::new(dir.path())));
    let meals: Vec<MealEntry> = second.load().await;
    assert_eq!(meals.len(), 1);
    assert!(dir.path().join("meals.json").exists());

    let stored = second.stored_collections().await?;
    assert_eq!(stored, vec![Collection::Weights, Collection::Meals]);
    Ok(())
}

#[tokio::test]
async fn test_file_store_leaves_no_temporary_files() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());
    store.set("weights", "[]").await?;
    store.set("weights", "[1]").await?;

    let names: Vec<String> = std::fs::read_dir(dir.path())?
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["weights.json".to_owned()]);
    assert_eq!(store.get("weights").await?.as_deref(), Some("[1]"));
    assert_eq!(store.keys().await?, vec!["weights".to_owned()]);
    Ok(())
}

#[tokio::test]
async fn test_file_store_missing_and_invalid_keys() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path().join("not-created-yet"));
    assert!(store.get("meals").await?.is_none());
    assert!(store.keys().await?.is_empty());
    store.remove("meals").await?;

    let err = store.set("../escape", "x").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[test]
fn test_collection_keys() {
    assert_eq!(Collection::Meals.key(), storage_keys::MEALS);
    assert_eq!(Collection::from_key("photos"), Some(Collection::Photos));
    assert_eq!(Collection::from_key(storage_keys::AUTH_USER), None);
}
