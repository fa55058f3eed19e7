// ABOUTME: Body metric aggregation: weight progress toward a target, BMI, and measurement changes
// ABOUTME: Date-ordered selections sort entries explicitly instead of trusting insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog_core::constants::body;
use fitlog_core::models::{MeasurementEntry, WeightEntry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Weight movement from the first weigh-in toward the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    /// Most recent weight by date
    pub current: f64,
    /// Earliest weight by date
    pub initial: f64,
    /// `initial - current` (positive means weight was lost)
    pub delta: f64,
    /// Share of the way from `initial` to the target, within `[0, 100]`
    pub percent_to_target: f64,
}

fn by_date(a: &WeightEntry, b: &WeightEntry) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.value.total_cmp(&b.value))
}

/// Progress of the weight log toward `target`
///
/// Returns `None` for an empty log. When the first weigh-in already equals the
/// target the ratio is undefined; it is reported as 100 if the current weight
/// is at or below target and 0 otherwise.
#[must_use]
pub fn weight_progress(entries: &[WeightEntry], target: f64) -> Option<WeightProgress> {
    let initial = entries.iter().min_by(|a, b| by_date(a, b))?.value;
    let current = entries.iter().max_by(|a, b| by_date(a, b))?.value;

    #[allow(clippy::float_cmp)] // exact equality is the undefined case
    let percent_to_target = if initial == target {
        if current <= target {
            100.0
        } else {
            0.0
        }
    } else {
        ((initial - current) / (initial - target) * 100.0).clamp(0.0, 100.0)
    };

    Some(WeightProgress {
        current,
        initial,
        delta: initial - current,
        percent_to_target,
    })
}

/// Kilograms still above `target` (never negative)
#[must_use]
pub fn remaining_to_target(current: f64, target: f64) -> f64 {
    (current - target).max(0.0)
}

/// Body mass index rounded to one decimal
///
/// Returns `None` when height or weight is not a positive finite number.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(weight_kg) || !valid(height_cm) {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

/// WHO adult BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        })
    }
}

/// Band for a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < body::BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < body::BMI_NORMAL_MAX {
        BmiCategory::Normal
    } else if bmi < body::BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// First and latest value of one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementChange {
    /// Measurement name
    pub name: String,
    /// Unit of the latest entry
    pub unit: String,
    /// Earliest value by date
    pub initial: f64,
    /// Latest value by date
    pub current: f64,
    /// `current - initial`
    pub change: f64,
}

fn measurement_order(a: &MeasurementEntry, b: &MeasurementEntry) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id))
}

/// Change of every measurement name, sorted by name
#[must_use]
pub fn measurement_changes(entries: &[MeasurementEntry]) -> Vec<MeasurementChange> {
    let mut grouped: BTreeMap<&str, Vec<&MeasurementEntry>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.name.as_str()).or_default().push(entry);
    }

    grouped
        .into_iter()
        .filter_map(|(name, group)| {
            let first = group.iter().min_by(|a, b| measurement_order(a, b))?;
            let last = group.iter().max_by(|a, b| measurement_order(a, b))?;
            Some(MeasurementChange {
                name: name.to_owned(),
                unit: last.unit.clone(),
                initial: first.value,
                current: last.value,
                change: last.value - first.value,
            })
        })
        .collect()
}
