// ABOUTME: User profile model for the logged-in session
// ABOUTME: UserProfile, UserGoal, and partial ProfilePatch merged by whole-record replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_defaults;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user is training towards
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserGoal {
    /// Caloric deficit, losing weight
    #[default]
    WeightLoss,
    /// Caloric surplus, gaining muscle
    MuscleGain,
}

impl UserGoal {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight loss",
            Self::MuscleGain => "Muscle gain",
        }
    }
}

impl fmt::Display for UserGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
        })
    }
}

impl FromStr for UserGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            other => Err(AppError::invalid_input(format!(
                "unknown goal '{other}' (expected weight_loss or muscle_gain)"
            ))),
        }
    }
}

/// Profile of the logged-in user, persisted as a single object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Email the session is bound to
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Training goal
    pub goal: UserGoal,
    /// Day the profile was created
    pub join_date: NaiveDate,
    /// Experience level label
    pub level: String,
}

impl UserProfile {
    /// Synthesize a default profile bound to `name` and `email`
    pub fn with_defaults(
        name: impl Into<String>,
        email: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: profile_defaults::AGE,
            height: profile_defaults::HEIGHT_CM,
            goal: UserGoal::WeightLoss,
            join_date,
            level: profile_defaults::LEVEL.to_owned(),
        }
    }

    /// Merge a partial update, returning the replacement record
    #[must_use]
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            age: patch.age.unwrap_or(self.age),
            height: patch.height.unwrap_or(self.height),
            goal: patch.goal.unwrap_or(self.goal),
            join_date: self.join_date,
            level: patch.level.clone().unwrap_or_else(|| self.level.clone()),
        }
    }
}

/// Partial profile update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    /// New display name
    pub name: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New age
    pub age: Option<u32>,
    /// New height in centimeters
    pub height: Option<f64>,
    /// New goal
    pub goal: Option<UserGoal>,
    /// New level label
    pub level: Option<String>,
}

impl ProfilePatch {
    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.height.is_none()
            && self.goal.is_none()
            && self.level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = UserProfile::with_defaults("Ana", "ana@example.com", join_date());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["joinDate"], "2024-01-01");
        assert_eq!(json["goal"], "weight_loss");
        assert_eq!(json["level"], "Beginner");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn test_merge_keeps_unpatched_fields() {
        let profile = UserProfile::with_defaults("Ana", "ana@example.com", join_date());
        let patch = ProfilePatch {
            age: Some(41),
            goal: Some(UserGoal::MuscleGain),
            ..ProfilePatch::default()
        };
        let merged = profile.merged(&patch);
        assert_eq!(merged.age, 41);
        assert_eq!(merged.goal, UserGoal::MuscleGain);
        assert_eq!(merged.name, "Ana");
        assert_eq!(merged.join_date, profile.join_date);
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!("muscle-gain".parse::<UserGoal>().unwrap(), UserGoal::MuscleGain);
        assert!("bulk".parse::<UserGoal>().is_err());
    }
}
