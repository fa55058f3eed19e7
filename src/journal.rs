// ABOUTME: Journal operations that create and read logged entries
// ABOUTME: Validates user input before any write and assigns monotonic entry ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::LogStore;
use chrono::{Local, NaiveDate, Utc};
use fitlog_core::constants::workouts;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::ids::EntryIdGenerator;
use fitlog_core::models::{
    FoodItem, LogEntry, MealEntry, MealSlot, MeasurementEntry, ProgressPhoto, WeightEntry,
    WorkoutEntry, WorkoutTemplate,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Parse user-entered weight text such as `"69.8"` or `"69,8"`
///
/// # Errors
///
/// Returns `InvalidInput` unless the text is a finite positive number
pub fn parse_weight(input: &str) -> AppResult<f64> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{}' is not a number", input.trim())))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight must be a positive number, got '{}'",
            input.trim()
        )));
    }
    Ok(value)
}

/// Parse a workout duration given as whole minutes
///
/// # Errors
///
/// Returns `InvalidInput` unless the text is a positive integer
pub fn parse_minutes(input: &str) -> AppResult<u32> {
    match input.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(AppError::invalid_input(format!(
            "duration must be a positive number of minutes, got '{}'",
            input.trim()
        ))),
    }
}

/// Entry operations over the persisted collections
#[derive(Clone)]
pub struct Journal {
    store: LogStore,
    ids: Arc<EntryIdGenerator>,
}

impl Journal {
    /// Create a journal writing through `store`
    #[must_use]
    pub fn new(store: LogStore) -> Self {
        Self {
            store,
            ids: Arc::new(EntryIdGenerator::new()),
        }
    }

    /// Id strictly greater than every id already stored in `entries`
    fn next_id<T: LogEntry>(&self, entries: &[T]) -> i64 {
        if let Some(max) = entries.iter().filter_map(T::entry_id).max() {
            self.ids.observe(max);
        }
        self.ids.next_id()
    }

    /// Record a weight check-in timestamped now
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparseable input (nothing is written), or
    /// the storage error if the entry cannot be persisted
    pub async fn record_weight(&self, input: &str) -> AppResult<WeightEntry> {
        let value = parse_weight(input)?;
        let entry = WeightEntry::new(Utc::now(), value);
        self.store.append(entry.clone()).await?;
        info!(value = value, "Weight recorded");
        Ok(entry)
    }

    /// Every weight entry
    pub async fn weights(&self) -> Vec<WeightEntry> {
        self.store.load().await
    }

    /// Every meal entry
    pub async fn meals(&self) -> Vec<MealEntry> {
        self.store.load().await
    }

    /// Meals logged on `day`
    pub async fn meals_on(&self, day: NaiveDate) -> Vec<MealEntry> {
        let mut meals: Vec<MealEntry> = self
            .meals()
            .await
            .into_iter()
            .filter(|m| m.date == day)
            .collect();
        meals.sort_by_key(|m| m.id);
        meals
    }

    /// Every workout entry, in stored order
    pub async fn workouts(&self) -> Vec<WorkoutEntry> {
        self.store.load().await
    }

    /// Every body measurement
    pub async fn measurements(&self) -> Vec<MeasurementEntry> {
        self.store.load().await
    }

    /// Every progress photo
    pub async fn photos(&self) -> Vec<ProgressPhoto> {
        self.store.load().await
    }

    /// Log `quantity` servings of `food` in `slot` on `day`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a quantity that is not a positive number,
    /// or the storage error if the meal cannot be persisted
    pub async fn add_meal(
        &self,
        food: &FoodItem,
        slot: MealSlot,
        quantity: f64,
        day: NaiveDate,
    ) -> AppResult<MealEntry> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        let time = Local::now().format("%H:%M").to_string();

        let entry = self
            .store
            .update(|meals: &mut Vec<MealEntry>| {
                let id = self.next_id(meals);
                let entry = MealEntry::from_food(id, food, slot, time, quantity, day);
                meals.push(entry.clone());
                Ok(entry)
            })
            .await?;
        info!(id = entry.id, name = %entry.name, slot = %slot, "Meal added");
        Ok(entry)
    }

    /// Change the serving multiplier of a logged meal
    ///
    /// A quantity of zero or less removes the meal, in which case `None` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `InvalidInput` for a
    /// non-finite quantity, or the storage error if the change cannot be
    /// persisted
    pub async fn update_meal_quantity(
        &self,
        id: i64,
        quantity: f64,
    ) -> AppResult<Option<MealEntry>> {
        if !quantity.is_finite() {
            return Err(AppError::invalid_input("quantity must be a finite number"));
        }

        let updated = self
            .store
            .update(|meals: &mut Vec<MealEntry>| {
                let position = meals
                    .iter()
                    .position(|m| m.id == id)
                    .ok_or_else(|| AppError::not_found(format!("Meal {id}")))?;
                if quantity <= 0.0 {
                    meals.remove(position);
                    return Ok(None);
                }
                meals[position].quantity = quantity;
                Ok(Some(meals[position].clone()))
            })
            .await?;

        match &updated {
            Some(meal) => debug!(id = id, quantity = meal.quantity, "Meal quantity updated"),
            None => info!(id = id, "Meal removed"),
        }
        Ok(updated)
    }

    /// Record `template` as completed today, at the front of the history
    ///
    /// # Errors
    ///
    /// Returns the storage error if the workout cannot be persisted
    pub async fn complete_workout(&self, template: &WorkoutTemplate) -> AppResult<WorkoutEntry> {
        let today = Local::now().date_naive();
        let entry = self
            .store
            .update(|history: &mut Vec<WorkoutEntry>| {
                let entry = template.complete(self.next_id(history), today);
                history.insert(0, entry.clone());
                Ok(entry)
            })
            .await?;
        info!(id = entry.id, name = %entry.name, "Workout completed");
        Ok(entry)
    }

    /// Build a custom workout template from user input
    ///
    /// Calories are estimated from the duration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or a duration that is not a
    /// positive whole number of minutes
    pub fn custom_workout(name: &str, duration_text: &str) -> AppResult<WorkoutTemplate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("workout name must not be empty"));
        }
        let duration = parse_minutes(duration_text)?;
        Ok(WorkoutTemplate {
            name: name.to_owned(),
            duration,
            difficulty: String::new(),
            calories: (f64::from(duration) * workouts::CUSTOM_KCAL_PER_MINUTE).round(),
            category: workouts::CUSTOM_CATEGORY.to_owned(),
            description: "Custom workout".to_owned(),
            exercises: Vec::new(),
        })
    }

    /// Record a body measurement dated today
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or a value that is not a
    /// positive number, or the storage error if it cannot be persisted
    pub async fn add_measurement(
        &self,
        name: &str,
        value: f64,
        unit: &str,
    ) -> AppResult<MeasurementEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("measurement name must not be empty"));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "measurement value must be positive, got {value}"
            )));
        }
        let date = Local::now().date_naive();
        let entry = self
            .store
            .update(|entries: &mut Vec<MeasurementEntry>| {
                let entry = MeasurementEntry {
                    id: self.next_id(entries),
                    name: name.to_owned(),
                    value,
                    unit: unit.trim().to_owned(),
                    date,
                };
                entries.push(entry.clone());
                Ok(entry)
            })
            .await?;
        info!(id = entry.id, name = %entry.name, "Measurement added");
        Ok(entry)
    }

    /// Record a progress photo dated today
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty uri, or the storage error if the
    /// photo cannot be persisted
    pub async fn add_photo(&self, uri: &str, kind: &str) -> AppResult<ProgressPhoto> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(AppError::invalid_input("photo uri must not be empty"));
        }
        let date = Local::now().date_naive();
        let photo = self
            .store
            .update(|photos: &mut Vec<ProgressPhoto>| {
                let photo = ProgressPhoto {
                    id: self.next_id(photos),
                    uri: uri.to_owned(),
                    kind: kind.trim().to_owned(),
                    date,
                };
                photos.push(photo.clone());
                Ok(photo)
            })
            .await?;
        info!(id = photo.id, "Progress photo added");
        Ok(photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_accepts_comma_decimal() {
        assert!((parse_weight("69,8").unwrap() - 69.8).abs() < 1e-9);
        assert!((parse_weight(" 72.5 ").unwrap() - 72.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_weight_rejects_bad_input() {
        for input in ["", "abc", "-3", "0", "inf", "NaN"] {
            assert!(parse_weight(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_custom_workout_estimates_calories() {
        let template = Journal::custom_workout("Evening run", "30").unwrap();
        assert_eq!(template.duration, 30);
        assert!((template.calories - 240.0).abs() < f64::EPSILON);
        assert_eq!(template.category, "custom");

        assert!(Journal::custom_workout("  ", "30").is_err());
        assert!(Journal::custom_workout("Run", "0").is_err());
        assert!(Journal::custom_workout("Run", "ten").is_err());
    }
}
