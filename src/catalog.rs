// ABOUTME: Built-in food suggestions and recommended workout templates
// ABOUTME: Slot and substring filtering for foods, category filtering for workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog_core::errors::AppError;
use fitlog_core::models::{Exercise, FoodItem, MealSlot, WorkoutTemplate};
use std::fmt;
use std::str::FromStr;

/// Workout categories offered by the recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCategory {
    /// Heart-rate focused sessions
    Cardio,
    /// Resistance work
    Strength,
    /// Mobility and stretching
    Flexibility,
}

impl WorkoutCategory {
    /// Category label as stored on workout entries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(Self::Cardio),
            "strength" => Ok(Self::Strength),
            "flexibility" => Ok(Self::Flexibility),
            other => Err(AppError::invalid_input(format!(
                "unknown workout category '{other}' (expected cardio, strength or flexibility)"
            ))),
        }
    }
}

fn food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64, slot: MealSlot) -> FoodItem {
    FoodItem::new(name, calories, protein, carbs, fat).in_category(slot)
}

/// Every suggested food
#[must_use]
pub fn food_suggestions() -> Vec<FoodItem> {
    use MealSlot::{Breakfast, Dinner, Lunch, Snack};
    vec![
        food("Scrambled eggs with spinach", 280.0, 20.0, 8.0, 18.0, Breakfast),
        food("Greek yogurt with blueberries", 150.0, 15.0, 20.0, 2.0, Breakfast),
        food("Wholegrain avocado toast", 220.0, 8.0, 25.0, 12.0, Breakfast),
        food("Tuna wrap", 380.0, 25.0, 32.0, 15.0, Lunch),
        food("Vegetable quinoa", 320.0, 12.0, 55.0, 8.0, Lunch),
        food("Lentil salad", 290.0, 18.0, 40.0, 6.0, Lunch),
        food("Almonds (30g)", 170.0, 6.0, 6.0, 15.0, Snack),
        food("Apple with almond butter", 190.0, 4.0, 25.0, 8.0, Snack),
        food("Plain Greek yogurt", 100.0, 17.0, 6.0, 0.0, Snack),
        food("Grilled salmon with broccoli", 420.0, 45.0, 12.0, 22.0, Dinner),
        food("Roast chicken with vegetables", 380.0, 40.0, 15.0, 18.0, Dinner),
        food("Stir-fried tofu with vegetables", 320.0, 20.0, 25.0, 16.0, Dinner),
    ]
}

/// Foods suggested for `slot` whose name contains `query`, ignoring case
#[must_use]
pub fn suggest_foods(slot: MealSlot, query: &str) -> Vec<FoodItem> {
    let query = query.trim().to_lowercase();
    food_suggestions()
        .into_iter()
        .filter(|item| item.category == Some(slot))
        .filter(|item| item.name.to_lowercase().contains(&query))
        .collect()
}

/// Suggested food with exactly this name, ignoring case
#[must_use]
pub fn find_food(name: &str) -> Option<FoodItem> {
    let name = name.trim();
    food_suggestions()
        .into_iter()
        .find(|item| item.name.eq_ignore_ascii_case(name))
}

fn exercises(steps: &[(&str, u32, u32)]) -> Vec<Exercise> {
    steps
        .iter()
        .map(|&(name, duration_secs, rest_secs)| Exercise {
            name: name.to_owned(),
            duration_secs,
            rest_secs,
        })
        .collect()
}

fn template(
    name: &str,
    duration: u32,
    difficulty: &str,
    calories: f64,
    category: WorkoutCategory,
    description: &str,
    steps: &[(&str, u32, u32)],
) -> WorkoutTemplate {
    WorkoutTemplate {
        name: name.to_owned(),
        duration,
        difficulty: difficulty.to_owned(),
        calories,
        category: category.as_str().to_owned(),
        description: description.to_owned(),
        exercises: exercises(steps),
    }
}

/// Recommended workouts, optionally restricted to one category
#[must_use]
pub fn recommended_workouts(category: Option<WorkoutCategory>) -> Vec<WorkoutTemplate> {
    use WorkoutCategory::{Cardio, Flexibility, Strength};
    let all = vec![
        template(
            "Fat-burn HIIT",
            25,
            "Intermediate",
            250.0,
            Cardio,
            "High-intensity intervals to burn as many calories as possible",
            &[
                ("Jumping Jacks", 45, 15),
                ("Burpees", 30, 30),
                ("Mountain Climbers", 45, 15),
                ("High Knees", 30, 30),
            ],
        ),
        template(
            "Core Strength",
            20,
            "Beginner",
            150.0,
            Strength,
            "Targeted work for abs and lower back",
            &[
                ("Plank", 30, 30),
                ("Crunches", 45, 15),
                ("Russian Twists", 30, 30),
                ("Dead Bug", 45, 15),
            ],
        ),
        template(
            "Cardio Dance",
            35,
            "Beginner",
            200.0,
            Cardio,
            "Dance while burning calories",
            &[
                ("Warm-up", 300, 0),
                ("Routine 1", 480, 60),
                ("Routine 2", 480, 60),
                ("Cool down", 180, 0),
            ],
        ),
        template(
            "Upper Body Power",
            40,
            "Advanced",
            280.0,
            Strength,
            "Build upper body strength with intense sets",
            &[
                ("Push-ups", 45, 15),
                ("Dips", 30, 30),
                ("Pike Push-ups", 30, 30),
                ("Side Plank", 30, 30),
            ],
        ),
        template(
            "Yoga Flow",
            30,
            "Beginner",
            120.0,
            Flexibility,
            "Relaxing yoga session to improve flexibility",
            &[
                ("Sun salutation", 300, 0),
                ("Standing poses", 600, 0),
                ("Seated poses", 600, 0),
                ("Relaxation", 300, 0),
            ],
        ),
    ];

    match category {
        Some(wanted) => all
            .into_iter()
            .filter(|w| w.category == wanted.as_str())
            .collect(),
        None => all,
    }
}

/// The 15-minute quick-start workout
#[must_use]
pub fn express_workout() -> WorkoutTemplate {
    template(
        "Express Workout",
        15,
        "Beginner",
        120.0,
        WorkoutCategory::Cardio,
        "Quick full-body circuit",
        &[
            ("Jumping Jacks", 30, 10),
            ("Squats", 30, 10),
            ("Push-ups", 30, 10),
            ("Plank", 30, 10),
        ],
    )
}

/// Recommended or express workout with this name, ignoring case
#[must_use]
pub fn find_workout(name: &str) -> Option<WorkoutTemplate> {
    let name = name.trim();
    recommended_workouts(None)
        .into_iter()
        .chain(std::iter::once(express_workout()))
        .find(|w| w.name.eq_ignore_ascii_case(name))
}
