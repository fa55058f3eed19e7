// ABOUTME: Output formatting helpers for the fitlog CLI
// ABOUTME: Consistent plain-text rendering of profiles, entries, and progress bars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog_core::models::{FoodItem, MealEntry, UserProfile, WorkoutEntry, WorkoutTemplate};

const BAR_WIDTH: usize = 20;

/// Render a `[0, 100]` percentage as a fixed-width bar
pub fn progress_bar(percent: f64) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    // Clamped to [0, 100] so the cast cannot truncate meaningfully
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {clamped:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Print a profile
pub fn display_profile(profile: &UserProfile) {
    println!("{}", "=".repeat(40));
    println!("   Name:   {}", profile.name);
    println!("   Email:  {}", profile.email);
    println!("   Age:    {}", profile.age);
    println!("   Height: {} cm", profile.height);
    println!("   Goal:   {}", profile.goal.label());
    println!("   Level:  {}", profile.level);
    println!("   Joined: {}", profile.join_date);
    println!("{}", "=".repeat(40));
}

/// Print a suggested food
pub fn display_food(food: &FoodItem) {
    println!(
        "   {:<34} {:>5.0} kcal  P {:>3.0}g  C {:>3.0}g  F {:>3.0}g",
        food.name, food.calories, food.protein, food.carbs, food.fat
    );
}

/// Print a logged meal
pub fn display_meal(meal: &MealEntry) {
    println!(
        "   #{:<14} {:<6} {:<9} {:<34} x{:<4} {:>6.0} kcal",
        meal.id,
        meal.time,
        meal.slot.as_str(),
        meal.name,
        meal.quantity,
        meal.scaled_calories()
    );
}

/// Print a workout template with its exercises
pub fn display_template(template: &WorkoutTemplate) {
    println!(
        "   {} ({} min, {:.0} kcal, {}, {})",
        template.name, template.duration, template.calories, template.category, template.difficulty
    );
    if !template.description.is_empty() {
        println!("      {}", template.description);
    }
    for exercise in &template.exercises {
        if exercise.rest_secs > 0 {
            println!(
                "      - {} {} (rest {}s)",
                exercise.name,
                format_seconds(exercise.duration_secs),
                exercise.rest_secs
            );
        } else {
            println!(
                "      - {} {}",
                exercise.name,
                format_seconds(exercise.duration_secs)
            );
        }
    }
}

/// Print a completed workout
pub fn display_workout(workout: &WorkoutEntry) {
    println!(
        "   {}  {:<24} {:>3} min {:>5.0} kcal  {}",
        workout.date, workout.name, workout.duration, workout.calories, workout.category
    );
}

/// `45s` below a minute, `m:ss` above
pub fn format_seconds(secs: u32) -> String {
    if secs > 60 {
        format!("{}:{:02}", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}
