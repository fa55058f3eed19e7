// ABOUTME: Meal commands for the fitlog CLI
// ABOUTME: Logging foods, adjusting servings, and daily nutrition against targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use fitlog::catalog::{find_food, suggest_foods};
use fitlog::context::AppContext;
use fitlog::storage::Collection;
use fitlog_core::models::{FoodItem, MealSlot};
use fitlog_intelligence::{
    daily_nutrition_totals, meal_slot_breakdown, nutrition_progress, target_progress,
};

use super::report_write;
use crate::helpers::display::{display_food, display_meal, progress_bar};

/// Per-serving amounts for a food that is not in the suggestions
pub struct CustomFood {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Log a meal
pub async fn add(
    ctx: &AppContext,
    name: &str,
    slot: MealSlot,
    quantity: f64,
    date: Option<NaiveDate>,
    custom: Option<CustomFood>,
) -> Result<()> {
    let food = match custom {
        Some(amounts) => FoodItem::new(
            name.trim(),
            amounts.calories,
            amounts.protein,
            amounts.carbs,
            amounts.fat,
        )
        .in_category(slot),
        None => find_food(name).ok_or_else(|| {
            anyhow!("'{name}' is not a suggested food; pass --calories to log a custom one")
        })?,
    };

    let day = date.unwrap_or_else(today);
    let meal = report_write(
        Collection::Meals,
        ctx.journal().add_meal(&food, slot, quantity, day).await,
    )?;
    println!("Added to {}:", meal.slot);
    display_meal(&meal);
    Ok(())
}

/// Show suggested foods for a slot
pub fn suggest(slot: MealSlot, query: &str) {
    let foods = suggest_foods(slot, query);
    if foods.is_empty() {
        println!("No suggestions for {slot} matching '{query}'");
        return;
    }
    println!("Suggestions for {slot}:");
    for food in &foods {
        display_food(food);
    }
}

/// Change or remove a logged meal
pub async fn set_quantity(ctx: &AppContext, id: i64, quantity: f64) -> Result<()> {
    match report_write(
        Collection::Meals,
        ctx.journal().update_meal_quantity(id, quantity).await,
    )? {
        Some(meal) => {
            println!("Updated:");
            display_meal(&meal);
        }
        None => println!("Removed meal #{id}"),
    }
    Ok(())
}

/// Meals logged on a day, grouped by slot
pub async fn list(ctx: &AppContext, date: Option<NaiveDate>) {
    let day = date.unwrap_or_else(today);
    let meals = ctx.journal().meals_on(day).await;
    if meals.is_empty() {
        println!("No meals logged on {day}");
        return;
    }
    for slot in MealSlot::ALL {
        let in_slot: Vec<_> = meals.iter().filter(|m| m.slot == slot).collect();
        if in_slot.is_empty() {
            continue;
        }
        println!("{slot}:");
        for meal in in_slot {
            display_meal(meal);
        }
    }
}

/// Nutrition totals for a day against the configured targets
pub async fn totals(ctx: &AppContext, date: Option<NaiveDate>) {
    let day = date.unwrap_or_else(today);
    let meals = ctx.journal().meals().await;
    let targets = ctx.config().nutrition_targets;
    let totals = daily_nutrition_totals(&meals, day);
    let progress = nutrition_progress(&totals, &targets);

    println!("Nutrition for {day}");
    println!(
        "   Calories {:>6.0} / {:<6.0} {}",
        totals.calories,
        targets.calories,
        progress_bar(progress.calories)
    );
    println!(
        "   Protein  {:>6.0} / {:<6.0} {}",
        totals.protein,
        targets.protein,
        progress_bar(progress.protein)
    );
    println!(
        "   Carbs    {:>6.0} / {:<6.0} {}",
        totals.carbs,
        targets.carbs,
        progress_bar(progress.carbs)
    );
    println!(
        "   Fat      {:>6.0} / {:<6.0} {}",
        totals.fat,
        targets.fat,
        progress_bar(progress.fat)
    );

    println!("By meal:");
    for slot in meal_slot_breakdown(&meals, day) {
        println!(
            "   {:<9} {:>6.0} / {:<6.0} {}",
            slot.slot.to_string(),
            slot.consumed,
            slot.target,
            progress_bar(target_progress(slot.consumed, slot.target))
        );
    }
}
