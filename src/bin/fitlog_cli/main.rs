// ABOUTME: fitlog CLI - command-line front end for the fitness and nutrition journal
// ABOUTME: Session, weight, meal, workout, measurement, and photo commands over local storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create a profile
//! fitlog auth register --name Alice --email alice@example.com --password secret
//!
//! # Log a weight check-in
//! fitlog weight add 69,8
//!
//! # Find and log a breakfast
//! fitlog meal suggest --slot breakfast --query yogurt
//! fitlog meal add "Greek yogurt with blueberries" --slot breakfast
//!
//! # Finish the express workout and show this week
//! fitlog workout start express
//! fitlog workout summary
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitlog::catalog::WorkoutCategory;
use fitlog::config::ClientConfig;
use fitlog::context::AppContext;
use fitlog::logging::LoggingConfig;
use fitlog_core::models::{MealSlot, UserGoal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitlog",
    about = "Local fitness and nutrition journal",
    long_about = "Log meals, workouts, weight, body measurements and progress photos, and see daily and weekly progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (file storage)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    memory: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Session management
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Weight check-ins
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Body mass index from the latest weight and profile height
    Bmi {
        /// Weight in kg (defaults to the latest check-in)
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm (defaults to the profile height)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Meal logging and daily nutrition
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Workouts and weekly activity
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Body measurements
    Measurement {
        #[command(subcommand)]
        action: MeasurementCommand,
    },

    /// Progress photos
    Photo {
        #[command(subcommand)]
        action: PhotoCommand,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Log in, creating a default profile for a new email
    Login {
        #[arg(long)]
        email: String,

        /// Accepted for compatibility; not verified
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Register a fresh profile, replacing the stored one
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Accepted for compatibility; not verified
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Clear the stored profile
    Logout,

    /// Show the current profile
    Whoami,

    /// Change profile fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// Height in cm
        #[arg(long)]
        height: Option<f64>,

        /// weight_loss or muscle_gain
        #[arg(long)]
        goal: Option<UserGoal>,

        #[arg(long)]
        level: Option<String>,
    },
}

#[derive(Subcommand)]
enum WeightCommand {
    /// Record a weight in kg ("69.8" or "69,8")
    Add { value: String },

    /// List every check-in, newest first
    List,

    /// Progress from the first check-in toward the target
    Progress {
        /// Target weight in kg (defaults to FITLOG_TARGET_WEIGHT_KG)
        #[arg(long)]
        target: Option<f64>,
    },
}

#[derive(Subcommand)]
enum MealCommand {
    /// Log a food from the suggestions, or a custom one with --calories
    Add {
        /// Food name
        name: String,

        /// breakfast, lunch, snack or dinner
        #[arg(long)]
        slot: MealSlot,

        /// Serving multiplier
        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        /// Day the meal belongs to (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Calories per serving for a custom food
        #[arg(long)]
        calories: Option<f64>,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },

    /// Suggested foods for a slot
    Suggest {
        #[arg(long)]
        slot: MealSlot,

        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Change a logged meal's serving multiplier (0 removes it)
    Quantity { id: i64, quantity: f64 },

    /// Meals logged on a day
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Calorie and macro totals against daily targets
    Totals {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Recommended workouts
    Recommended {
        /// cardio, strength or flexibility
        #[arg(long)]
        category: Option<WorkoutCategory>,
    },

    /// Complete a recommended workout ("express" for the 15-minute one)
    Start { name: String },

    /// Complete a custom workout
    Custom {
        #[arg(long)]
        name: String,

        /// Duration in whole minutes
        #[arg(long)]
        duration: String,
    },

    /// Workout history, newest first
    History,

    /// This week's count, minutes, calories and streak
    Summary,
}

#[derive(Subcommand)]
enum MeasurementCommand {
    /// Record a measurement
    Add {
        name: String,
        value: f64,
        #[arg(default_value = "cm")]
        unit: String,
    },

    /// Every measurement with change since the first entry
    List,
}

#[derive(Subcommand)]
enum PhotoCommand {
    /// Record a progress photo
    Add {
        uri: String,

        /// front, side or back
        #[arg(long, default_value = "front")]
        kind: String,
    },

    /// Every progress photo
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if cli.memory {
        config = config.with_memory_storage();
    }
    config.log_summary();

    let ctx = AppContext::init(config).await?;

    match cli.command {
        Command::Auth { action } => match action {
            AuthCommand::Login { email, password } => {
                commands::auth::login(&ctx, &email, &password).await?;
            }
            AuthCommand::Register {
                name,
                email,
                password,
            } => commands::auth::register(&ctx, &name, &email, &password).await?,
            AuthCommand::Logout => commands::auth::logout(&ctx).await?,
            AuthCommand::Whoami => commands::auth::whoami(&ctx).await,
            AuthCommand::Update {
                name,
                email,
                age,
                height,
                goal,
                level,
            } => {
                let patch = fitlog_core::models::ProfilePatch {
                    name,
                    email,
                    age,
                    height,
                    goal,
                    level,
                };
                commands::auth::update(&ctx, &patch).await?;
            }
        },
        Command::Weight { action } => match action {
            WeightCommand::Add { value } => commands::body::add_weight(&ctx, &value).await?,
            WeightCommand::List => commands::body::list_weights(&ctx).await,
            WeightCommand::Progress { target } => commands::body::progress(&ctx, target).await,
        },
        Command::Bmi { weight, height } => commands::body::bmi(&ctx, weight, height).await?,
        Command::Meal { action } => match action {
            MealCommand::Add {
                name,
                slot,
                quantity,
                date,
                calories,
                protein,
                carbs,
                fat,
            } => {
                let custom = calories.map(|calories| commands::meal::CustomFood {
                    calories,
                    protein,
                    carbs,
                    fat,
                });
                commands::meal::add(&ctx, &name, slot, quantity, date, custom).await?;
            }
            MealCommand::Suggest { slot, query } => commands::meal::suggest(slot, &query),
            MealCommand::Quantity { id, quantity } => {
                commands::meal::set_quantity(&ctx, id, quantity).await?;
            }
            MealCommand::List { date } => commands::meal::list(&ctx, date).await,
            MealCommand::Totals { date } => commands::meal::totals(&ctx, date).await,
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Recommended { category } => commands::workout::recommended(category),
            WorkoutCommand::Start { name } => commands::workout::start(&ctx, &name).await?,
            WorkoutCommand::Custom { name, duration } => {
                commands::workout::custom(&ctx, &name, &duration).await?;
            }
            WorkoutCommand::History => commands::workout::history(&ctx).await,
            WorkoutCommand::Summary => commands::workout::summary(&ctx).await,
        },
        Command::Measurement { action } => match action {
            MeasurementCommand::Add { name, value, unit } => {
                commands::body::add_measurement(&ctx, &name, value, &unit).await?;
            }
            MeasurementCommand::List => commands::body::list_measurements(&ctx).await,
        },
        Command::Photo { action } => match action {
            PhotoCommand::Add { uri, kind } => commands::body::add_photo(&ctx, &uri, &kind).await?,
            PhotoCommand::List => commands::body::list_photos(&ctx).await,
        },
    }

    Ok(())
}
