// ABOUTME: Nutrition aggregation over logged meals
// ABOUTME: Daily calorie/macro totals, per-slot calories, and progress against daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitlog_core::constants::nutrition_targets;
use fitlog_core::models::{MealEntry, MealSlot};
use serde::{Deserialize, Serialize};

/// Calories and macros consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Daily nutrition targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            calories: nutrition_targets::CALORIES,
            protein: nutrition_targets::PROTEIN_G,
            carbs: nutrition_targets::CARBS_G,
            fat: nutrition_targets::FAT_G,
        }
    }
}

/// Percent of each daily target reached, each within `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProgress {
    /// Calories percent
    pub calories: f64,
    /// Protein percent
    pub protein: f64,
    /// Carbohydrates percent
    pub carbs: f64,
    /// Fat percent
    pub fat: f64,
}

/// Calories eaten in one meal slot against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSlotProgress {
    /// Meal slot
    pub slot: MealSlot,
    /// Calories consumed in the slot
    pub consumed: f64,
    /// Calorie target for the slot
    pub target: f64,
    /// Percent of the target reached, within `[0, 100]`
    pub percent: f64,
}

/// Calorie target for a meal slot
#[must_use]
pub const fn slot_calorie_target(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => nutrition_targets::BREAKFAST_CALORIES,
        MealSlot::Lunch => nutrition_targets::LUNCH_CALORIES,
        MealSlot::Snack => nutrition_targets::SNACK_CALORIES,
        MealSlot::Dinner => nutrition_targets::DINNER_CALORIES,
    }
}

/// Sum that does not depend on the order values arrive in
fn bag_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Sum `field * quantity` for every meal logged on `day`
///
/// Missing or non-finite amounts count as zero.
#[must_use]
pub fn daily_nutrition_totals(meals: &[MealEntry], day: NaiveDate) -> NutritionTotals {
    let todays: Vec<&MealEntry> = meals.iter().filter(|meal| meal.date == day).collect();
    let total = |field: fn(&MealEntry) -> f64| {
        bag_sum(todays.iter().map(|meal| meal.scaled(field(meal))).collect())
    };

    NutritionTotals {
        calories: total(|meal| meal.calories),
        protein: total(|meal| meal.protein),
        carbs: total(|meal| meal.carbs),
        fat: total(|meal| meal.fat),
    }
}

/// Sum `calories * quantity` for every meal logged in `slot`
#[must_use]
pub fn meal_type_calories(meals: &[MealEntry], slot: MealSlot) -> f64 {
    bag_sum(
        meals
            .iter()
            .filter(|meal| meal.slot == slot)
            .map(MealEntry::scaled_calories)
            .collect(),
    )
}

/// Percent of `target` reached by `current`, clamped to `[0, 100]`
///
/// A non-positive target yields zero.
#[must_use]
pub fn target_progress(current: f64, target: f64) -> f64 {
    if target.is_nan() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Progress of each total against its daily target
#[must_use]
pub fn nutrition_progress(totals: &NutritionTotals, targets: &NutritionTargets) -> NutritionProgress {
    NutritionProgress {
        calories: target_progress(totals.calories, targets.calories),
        protein: target_progress(totals.protein, targets.protein),
        carbs: target_progress(totals.carbs, targets.carbs),
        fat: target_progress(totals.fat, targets.fat),
    }
}

/// Calories per meal slot on `day`, in breakfast/lunch/snack/dinner order
#[must_use]
pub fn meal_slot_breakdown(meals: &[MealEntry], day: NaiveDate) -> Vec<MealSlotProgress> {
    let todays: Vec<MealEntry> = meals
        .iter()
        .filter(|meal| meal.date == day)
        .cloned()
        .collect();

    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let consumed = meal_type_calories(&todays, slot);
            let target = slot_calorie_target(slot);
            MealSlotProgress {
                slot,
                consumed,
                target,
                percent: target_progress(consumed, target),
            }
        })
        .collect()
}
