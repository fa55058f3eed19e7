// ABOUTME: Workout log entry and reusable workout template models
// ABOUTME: WorkoutEntry is persisted; WorkoutTemplate describes a session before it is completed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::zero_if_null;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Identifier generated when the session was recorded
    pub id: i64,
    /// Workout name
    pub name: String,
    /// Duration in minutes
    #[serde(default, deserialize_with = "zero_if_null")]
    pub duration: u32,
    /// Estimated calories burned
    #[serde(default, deserialize_with = "zero_if_null")]
    pub calories: f64,
    /// Category (cardio, strength, flexibility, custom)
    #[serde(rename = "type", default)]
    pub category: String,
    /// Day the workout took place
    pub date: NaiveDate,
    /// Whether the session was finished
    #[serde(default)]
    pub completed: bool,
}

/// Single exercise inside a workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Work interval in seconds
    pub duration_secs: u32,
    /// Rest interval in seconds
    pub rest_secs: u32,
}

/// A workout that can be started and, once finished, recorded as an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Workout name
    pub name: String,
    /// Planned duration in minutes
    pub duration: u32,
    /// Difficulty label
    pub difficulty: String,
    /// Estimated calories burned
    pub calories: f64,
    /// Category (cardio, strength, flexibility, custom)
    pub category: String,
    /// Short description
    pub description: String,
    /// Exercise sequence
    pub exercises: Vec<Exercise>,
}

impl WorkoutTemplate {
    /// Turn the template into a completed entry
    #[must_use]
    pub fn complete(&self, id: i64, date: NaiveDate) -> WorkoutEntry {
        WorkoutEntry {
            id,
            name: self.name.clone(),
            duration: self.duration,
            calories: self.calories,
            category: self.category.clone(),
            date,
            completed: true,
        }
    }
}
