// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, schema versions, profile defaults, and nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Keys under which collections are persisted in the key-value store
pub mod storage_keys {
    /// Array of weight entries
    pub const WEIGHTS: &str = "weights";
    /// Array of meal entries
    pub const MEALS: &str = "meals";
    /// Array of workout entries
    pub const WORKOUTS: &str = "workouts";
    /// Array of body measurement entries
    pub const MEASUREMENTS: &str = "measurements";
    /// Array of progress photos
    pub const PHOTOS: &str = "photos";
    /// Single user profile object
    pub const AUTH_USER: &str = "auth_user";
}

/// Persisted schema versioning
pub mod schema {
    /// Version written by every save
    pub const CURRENT_VERSION: u32 = 1;
    /// Version assigned to bare values written before the envelope existed
    pub const LEGACY_VERSION: u32 = 0;
    /// Envelope field holding the version number
    pub const VERSION_FIELD: &str = "schema_version";
    /// Envelope field holding the payload
    pub const DATA_FIELD: &str = "data";
}

/// Defaults for synthesized profiles
pub mod profile_defaults {
    /// Default age in years
    pub const AGE: u32 = 30;
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 170.0;
    /// Default experience level
    pub const LEVEL: &str = "Beginner";
    /// Display name used when login synthesizes a profile
    pub const LOGIN_NAME: &str = "User";
}

/// Daily nutrition targets shown against consumed totals
pub mod nutrition_targets {
    /// Daily calorie target (kcal)
    pub const CALORIES: f64 = 1500.0;
    /// Daily protein target (g)
    pub const PROTEIN_G: f64 = 120.0;
    /// Daily carbohydrate target (g)
    pub const CARBS_G: f64 = 150.0;
    /// Daily fat target (g)
    pub const FAT_G: f64 = 50.0;

    /// Breakfast slot calorie target
    pub const BREAKFAST_CALORIES: f64 = 350.0;
    /// Lunch slot calorie target
    pub const LUNCH_CALORIES: f64 = 450.0;
    /// Snack slot calorie target
    pub const SNACK_CALORIES: f64 = 200.0;
    /// Dinner slot calorie target
    pub const DINNER_CALORIES: f64 = 500.0;
}

/// Body metric thresholds and defaults
pub mod body {
    /// Default target weight (kg)
    pub const DEFAULT_TARGET_WEIGHT_KG: f64 = 65.0;
    /// Upper bound of the underweight BMI band
    pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
    /// Upper bound of the normal BMI band
    pub const BMI_NORMAL_MAX: f64 = 25.0;
    /// Upper bound of the overweight BMI band
    pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;
}

/// Workout estimation constants
pub mod workouts {
    /// Calories burned per minute for custom workouts
    pub const CUSTOM_KCAL_PER_MINUTE: f64 = 8.0;
    /// Category recorded for user-defined workouts
    pub const CUSTOM_CATEGORY: &str = "custom";
}
