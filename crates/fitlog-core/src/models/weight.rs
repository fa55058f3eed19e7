// ABOUTME: Body weight log entry model
// ABOUTME: Accepts RFC 3339 timestamps or bare dates when reading stored entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One weigh-in
///
/// Entries are append-only and duplicate dates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// When the weight was recorded
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<Utc>,
    /// Weight in kilograms
    pub value: f64,
}

impl WeightEntry {
    /// Create a weigh-in
    #[must_use]
    pub const fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    // Older entries stored only the day
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| D::Error::custom(format!("invalid weight timestamp '{raw}'")))
}
