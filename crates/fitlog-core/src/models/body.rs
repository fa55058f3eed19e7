// ABOUTME: Body measurement and progress photo models
// ABOUTME: Append-only records keyed by generated ids and dated by day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::zero_if_null;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A body measurement such as waist or hip circumference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    /// Identifier generated when the measurement was recorded
    pub id: i64,
    /// What was measured ("Waist", "Hips", ...)
    pub name: String,
    /// Measured value
    #[serde(default, deserialize_with = "zero_if_null")]
    pub value: f64,
    /// Unit of the value ("cm")
    pub unit: String,
    /// Day of the measurement
    pub date: NaiveDate,
}

/// Reference to a progress photo stored outside the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPhoto {
    /// Identifier generated when the photo was added
    pub id: i64,
    /// Location of the image
    pub uri: String,
    /// Pose (front, side, back)
    #[serde(rename = "type")]
    pub kind: String,
    /// Day the photo was taken
    pub date: NaiveDate,
}
