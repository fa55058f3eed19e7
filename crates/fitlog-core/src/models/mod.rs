// ABOUTME: Persisted entity definitions for weights, meals, workouts, body metrics, and profile
// ABOUTME: Plain serde records matching the JSON layout written to the key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! All entities are plain records owned by the log store. Relationships such
//! as "today's meals" are established by filtering on `date` or `type` at read
//! time; no entity references another.

mod body;
mod nutrition;
mod user;
mod weight;
mod workout;

pub use body::{MeasurementEntry, ProgressPhoto};
pub use nutrition::{FoodItem, MealEntry, MealSlot};
pub use user::{ProfilePatch, UserGoal, UserProfile};
pub use weight::WeightEntry;
pub use workout::{Exercise, WorkoutEntry, WorkoutTemplate};

use crate::constants::storage_keys;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A record kept in one of the persisted log collections
pub trait LogEntry: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key of the collection holding this entry type
    const KEY: &'static str;

    /// Identifier used to match entries on update, if the type has one
    fn entry_id(&self) -> Option<i64>;

    /// Whether the entry may be persisted; entries that fail are removed instead
    fn is_storable(&self) -> bool {
        true
    }
}

impl LogEntry for WeightEntry {
    const KEY: &'static str = storage_keys::WEIGHTS;

    fn entry_id(&self) -> Option<i64> {
        None
    }
}

impl LogEntry for MealEntry {
    const KEY: &'static str = storage_keys::MEALS;

    fn entry_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn is_storable(&self) -> bool {
        self.has_positive_quantity()
    }
}

impl LogEntry for WorkoutEntry {
    const KEY: &'static str = storage_keys::WORKOUTS;

    fn entry_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl LogEntry for MeasurementEntry {
    const KEY: &'static str = storage_keys::MEASUREMENTS;

    fn entry_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl LogEntry for ProgressPhoto {
    const KEY: &'static str = storage_keys::PHOTOS;

    fn entry_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

/// Deserialize a numeric field, mapping `null` to zero
///
/// Combined with `#[serde(default)]` this makes missing and null amounts
/// count as zero instead of rejecting the whole stored collection.
pub(crate) fn zero_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sanitize an amount read from storage: non-finite values count as zero
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
