// ABOUTME: Body metric commands for the fitlog CLI
// ABOUTME: Weight check-ins and progress, BMI, measurements, and progress photos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use fitlog::context::AppContext;
use fitlog::storage::Collection;
use fitlog_core::constants::profile_defaults;
use fitlog_intelligence::{
    bmi as compute_bmi, bmi_category, measurement_changes, remaining_to_target, weight_progress,
};

use super::report_write;
use crate::helpers::display::progress_bar;

/// Record a weight check-in
pub async fn add_weight(ctx: &AppContext, input: &str) -> Result<()> {
    let entry = report_write(Collection::Weights, ctx.journal().record_weight(input).await)?;
    println!(
        "Recorded {:.1} kg on {}",
        entry.value,
        entry.date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

/// List weight check-ins, newest first
pub async fn list_weights(ctx: &AppContext) {
    let mut weights = ctx.journal().weights().await;
    if weights.is_empty() {
        println!("No weight entries yet");
        return;
    }
    weights.sort_by(|a, b| b.date.cmp(&a.date));
    for entry in &weights {
        println!("   {}  {:>6.1} kg", entry.date.format("%Y-%m-%d"), entry.value);
    }
}

/// Show progress toward the target weight
pub async fn progress(ctx: &AppContext, target: Option<f64>) {
    let target = target.unwrap_or(ctx.config().target_weight_kg);
    let weights = ctx.journal().weights().await;
    let Some(progress) = weight_progress(&weights, target) else {
        println!("No weight entries yet");
        return;
    };
    println!("   Initial:   {:.1} kg", progress.initial);
    println!("   Current:   {:.1} kg", progress.current);
    println!("   Lost:      {:.1} kg", progress.delta);
    println!("   Target:    {target:.1} kg");
    println!(
        "   Remaining: {:.1} kg",
        remaining_to_target(progress.current, target)
    );
    println!("   {}", progress_bar(progress.percent_to_target));
}

/// Show BMI from explicit values or the latest weight and profile height
pub async fn bmi(ctx: &AppContext, weight: Option<f64>, height: Option<f64>) -> Result<()> {
    let weight = match weight {
        Some(w) => w,
        None => {
            let weights = ctx.journal().weights().await;
            weight_progress(&weights, ctx.config().target_weight_kg)
                .map(|p| p.current)
                .ok_or_else(|| anyhow!("no weight entries yet; pass --weight"))?
        }
    };
    let height = match height {
        Some(h) => h,
        None => ctx
            .session()
            .current()
            .await
            .map_or(profile_defaults::HEIGHT_CM, |p| p.height),
    };

    let value = compute_bmi(weight, height)
        .ok_or_else(|| anyhow!("weight and height must be positive numbers"))?;
    println!("   BMI {value:.1} ({})", bmi_category(value));
    Ok(())
}

/// Record a body measurement
pub async fn add_measurement(ctx: &AppContext, name: &str, value: f64, unit: &str) -> Result<()> {
    let entry = report_write(
        Collection::Measurements,
        ctx.journal().add_measurement(name, value, unit).await,
    )?;
    println!("Recorded {} {} {}", entry.name, entry.value, entry.unit);
    Ok(())
}

/// List measurements with change since the first entry
pub async fn list_measurements(ctx: &AppContext) {
    let entries = ctx.journal().measurements().await;
    if entries.is_empty() {
        println!("No measurements yet");
        return;
    }
    for change in measurement_changes(&entries) {
        println!(
            "   {:<12} {:>6.1} {} ({:+.1} since {:.1})",
            change.name, change.current, change.unit, change.change, change.initial
        );
    }
}

/// Record a progress photo
pub async fn add_photo(ctx: &AppContext, uri: &str, kind: &str) -> Result<()> {
    let photo = report_write(Collection::Photos, ctx.journal().add_photo(uri, kind).await)?;
    println!("Saved {} photo #{}", photo.kind, photo.id);
    Ok(())
}

/// List progress photos
pub async fn list_photos(ctx: &AppContext) {
    let photos = ctx.journal().photos().await;
    if photos.is_empty() {
        println!("No progress photos yet");
        return;
    }
    for photo in &photos {
        println!("   {}  {:<6} {}", photo.date, photo.kind, photo.uri);
    }
}
