// ABOUTME: Aggregation engine folding logged entries into totals, streaks, and progress
// ABOUTME: Stateless and side-effect free; callers load entries and pass them in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Intelligence
//!
//! Pure transforms over collections loaded from the log store. Every function
//! gives the same answer for the same bag of entries regardless of iteration
//! order, except where a result is explicitly date-ordered (current weight,
//! streaks, earliest and latest measurements), and even there date ties are
//! broken deterministically.

/// Body metrics: weight progress, BMI, and measurement changes
pub mod body;

/// Daily nutrition totals and progress against targets
pub mod nutrition;

/// Weekly workout summaries and streaks
pub mod workouts;

pub use body::{
    bmi, bmi_category, measurement_changes, remaining_to_target, weight_progress, BmiCategory,
    MeasurementChange, WeightProgress,
};
pub use nutrition::{
    daily_nutrition_totals, meal_slot_breakdown, meal_type_calories, nutrition_progress,
    target_progress, MealSlotProgress, NutritionProgress, NutritionTargets, NutritionTotals,
};
pub use workouts::{weekly_workout_summary, workout_history, workout_streak, WeeklyWorkoutSummary};
