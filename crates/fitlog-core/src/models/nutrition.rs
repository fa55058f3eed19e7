// ABOUTME: Nutrition tracking models for logged meals
// ABOUTME: MealSlot, FoodItem, and MealEntry definitions with quantity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{finite_or_zero, zero_if_null};
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Snack between meals
    Snack,
    /// Dinner meal
    Dinner,
}

impl MealSlot {
    /// All slots in the order they occur during a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Lowercase name as persisted
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            other => Err(AppError::invalid_input(format!(
                "unknown meal slot '{other}' (expected breakfast, lunch, snack or dinner)"
            ))),
        }
    }
}

/// Food with per-serving nutrition values, before it is logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Calories per serving
    #[serde(default, deserialize_with = "zero_if_null")]
    pub calories: f64,
    /// Protein per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub carbs: f64,
    /// Fat per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fat: f64,
    /// Slot the food is suggested for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MealSlot>,
}

impl FoodItem {
    /// Create a food item with the given per-serving values
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            category: None,
        }
    }

    /// Tag the food with the slot it is suggested for
    #[must_use]
    pub const fn in_category(mut self, slot: MealSlot) -> Self {
        self.category = Some(slot);
        self
    }
}

const fn default_quantity() -> f64 {
    1.0
}

/// Logged meal: a food eaten in a slot on a day, scaled by `quantity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Identifier generated when the meal is logged
    pub id: i64,
    /// Food name
    pub name: String,
    /// Calories per serving
    #[serde(default, deserialize_with = "zero_if_null")]
    pub calories: f64,
    /// Protein per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub carbs: f64,
    /// Fat per serving (grams)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fat: f64,
    /// Suggestion category the food came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MealSlot>,
    /// Meal slot the entry was logged under
    #[serde(rename = "type")]
    pub slot: MealSlot,
    /// Local time of day the entry was logged (`HH:MM`)
    #[serde(default)]
    pub time: String,
    /// Serving multiplier, always positive once stored
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Day the meal belongs to
    pub date: NaiveDate,
}

impl MealEntry {
    /// Build a log entry from a food item
    #[must_use]
    pub fn from_food(
        id: i64,
        food: &FoodItem,
        slot: MealSlot,
        time: impl Into<String>,
        quantity: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: food.name.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            category: food.category,
            slot,
            time: time.into(),
            quantity,
            date,
        }
    }

    /// Whether the multiplier allows the entry to be stored
    #[must_use]
    pub fn has_positive_quantity(&self) -> bool {
        self.quantity.is_finite() && self.quantity > 0.0
    }

    /// Calories contributed by this entry (`calories * quantity`)
    #[must_use]
    pub fn scaled_calories(&self) -> f64 {
        self.scaled(self.calories)
    }

    /// Scale a per-serving amount by the entry quantity
    #[must_use]
    pub fn scaled(&self, per_serving: f64) -> f64 {
        finite_or_zero(per_serving) * finite_or_zero(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_entry_persisted_shape() {
        let food = FoodItem::new("Tuna wrap", 380.0, 25.0, 32.0, 15.0).in_category(MealSlot::Lunch);
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let entry = MealEntry::from_food(1_709_542_800_000, &food, MealSlot::Lunch, "12:30", 2.0, day);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "lunch");
        assert_eq!(json["category"], "lunch");
        assert_eq!(json["date"], "2024-03-04");
        assert_eq!(json["quantity"], 2.0);
    }

    #[test]
    fn test_missing_and_null_amounts_read_as_zero() {
        let json = r#"{"id":1,"name":"Water","type":"snack","date":"2024-03-04","calories":null}"#;
        let entry: MealEntry = serde_json::from_str(json).unwrap();
        assert!(entry.calories.abs() < f64::EPSILON);
        assert!(entry.protein.abs() < f64::EPSILON);
        assert!((entry.quantity - 1.0).abs() < f64::EPSILON);
        assert!(entry.scaled_calories().abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantity_must_be_positive_to_store() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let food = FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3);
        let mut entry = MealEntry::from_food(1, &food, MealSlot::Snack, "16:00", 0.0, day);
        assert!(!entry.has_positive_quantity());
        entry.quantity = f64::NAN;
        assert!(!entry.has_positive_quantity());
        entry.quantity = 0.5;
        assert!(entry.has_positive_quantity());
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!(" Dinner ".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("brunch".parse::<MealSlot>().is_err());
    }
}
