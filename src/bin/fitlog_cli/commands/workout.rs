// ABOUTME: Workout commands for the fitlog CLI
// ABOUTME: Recommended templates, completing workouts, history, and weekly summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use chrono::{Datelike, Days, Local};
use fitlog::catalog::{express_workout, find_workout, recommended_workouts, WorkoutCategory};
use fitlog::context::AppContext;
use fitlog::journal::Journal;
use fitlog::storage::Collection;
use fitlog_core::models::WorkoutTemplate;
use fitlog_intelligence::{weekly_workout_summary, workout_history};

use super::report_write;
use crate::helpers::display::{display_template, display_workout};

/// List recommended workouts
pub fn recommended(category: Option<WorkoutCategory>) {
    for template in recommended_workouts(category) {
        display_template(&template);
    }
}

async fn complete(ctx: &AppContext, template: &WorkoutTemplate) -> Result<()> {
    display_template(template);
    let entry = report_write(
        Collection::Workouts,
        ctx.journal().complete_workout(template).await,
    )?;
    println!("Completed:");
    display_workout(&entry);
    Ok(())
}

/// Complete a recommended workout by name
pub async fn start(ctx: &AppContext, name: &str) -> Result<()> {
    let template = if name.trim().eq_ignore_ascii_case("express") {
        express_workout()
    } else {
        find_workout(name).ok_or_else(|| {
            anyhow!("no workout named '{name}'; see `fitlog workout recommended`")
        })?
    };
    complete(ctx, &template).await
}

/// Complete a custom workout
pub async fn custom(ctx: &AppContext, name: &str, duration: &str) -> Result<()> {
    let template = Journal::custom_workout(name, duration)?;
    complete(ctx, &template).await
}

/// Workout history, newest first
pub async fn history(ctx: &AppContext) {
    let workouts = ctx.journal().workouts().await;
    if workouts.is_empty() {
        println!("No workouts yet");
        return;
    }
    for workout in workout_history(&workouts) {
        display_workout(&workout);
    }
}

/// This week's totals and the current streak
pub async fn summary(ctx: &AppContext) {
    let today = Local::now().date_naive();
    let week_start = today
        .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))
        .unwrap_or(today);
    let workouts = ctx.journal().workouts().await;
    let summary = weekly_workout_summary(&workouts, week_start, today);

    println!("Week of {week_start}");
    println!("   Workouts: {}", summary.count);
    println!("   Minutes:  {}", summary.total_duration);
    println!("   Calories: {:.0}", summary.total_calories);
    println!("   Streak:   {} day(s)", summary.streak_days);
}
