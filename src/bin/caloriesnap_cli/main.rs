// ABOUTME: CalorieSnap CLI - log meals, water, and coach questions against the saved daily log
// ABOUTME: Parses arguments, wires the tracker to the file store, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap
//!
//! Usage:
//! ```bash
//! # One-time profile setup
//! caloriesnap-cli setup --name Sam --age 30 --weight 70 --height 175 \
//!     --gender male --activity moderate --goal maintain
//!
//! # Log a meal from a description
//! caloriesnap-cli log "2 eggs and toast" --meal-type breakfast
//!
//! # Quick-add water, or a custom amount
//! caloriesnap-cli water
//! caloriesnap-cli water --ml 500
//!
//! # Today's dashboard, and coach questions
//! caloriesnap-cli today
//! caloriesnap-cli ask "how am I doing?"
//!
//! # Interactive session with a live undo window
//! caloriesnap-cli session
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

use caloriesnap::config::TrackerConfig;
use caloriesnap::intelligence::ProfileInputs;
use caloriesnap::logging::LoggingConfig;
use caloriesnap::models::{ActivityLevel, Gender, Goal};
use caloriesnap::persistence::{FileKeyValueStore, StateRepository};
use caloriesnap::services::NutritionTracker;

#[derive(Parser)]
#[command(
    name = "caloriesnap-cli",
    about = "CalorieSnap nutrition tracker",
    long_about = "Estimate meal nutrition from a description, keep a daily food and water log, and ask a rule-based nutrition coach."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to CALORIESNAP_DATA_DIR or ./.caloriesnap)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create the profile and compute daily targets
    Setup {
        /// Display name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// male or female
        #[arg(long)]
        gender: Gender,

        /// sedentary, light, moderate, or active
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// lose, maintain, or gain
        #[arg(long, default_value = "maintain")]
        goal: Goal,
    },

    /// Estimate a meal and add it to today's log
    Log {
        /// Meal description, e.g. "2 eggs and toast"
        #[arg(default_value = "")]
        text: String,

        /// MIME type of an attached photo (the photo itself is not inspected)
        #[arg(long)]
        image_mime: Option<String>,

        /// breakfast, lunch, dinner, or snack
        #[arg(long)]
        meal_type: Option<String>,
    },

    /// Add water to today's log
    Water {
        /// Amount in ml (defaults to the quick-add amount)
        #[arg(long)]
        ml: Option<f64>,
    },

    /// Delete a logged meal
    Remove {
        /// Day the meal was logged under (YYYY-MM-DD)
        date: NaiveDate,

        /// Meal id
        id: String,
    },

    /// Show today's log and progress
    Today,

    /// Ask the nutrition coach
    Ask {
        /// Question for the coach
        message: String,
    },

    /// Interactive session; meals logged here can be undone for a few seconds
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(log_level).init()?;

    let mut config = TrackerConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!(data_dir = %config.data_dir.display(), "Opening tracker");

    let repository = StateRepository::new(Arc::new(FileKeyValueStore::new(&config.data_dir)));
    let tracker = NutritionTracker::builder(config, repository).build()?;
    tracker.load().await?;

    match cli.command {
        Command::Setup {
            name,
            age,
            weight,
            height,
            gender,
            activity,
            goal,
        } => {
            let inputs = ProfileInputs {
                name,
                age,
                weight_kg: weight,
                height_cm: height,
                gender,
                activity_level: activity,
                goal,
            };
            commands::profile::setup(&tracker, &inputs).await?;
        }
        Command::Log {
            text,
            image_mime,
            meal_type,
        } => {
            commands::meals::log(&tracker, text, image_mime, meal_type.as_deref()).await?;
        }
        Command::Water { ml } => {
            commands::meals::water(&tracker, ml).await?;
        }
        Command::Remove { date, id } => {
            commands::meals::remove(&tracker, date, &id).await?;
        }
        Command::Today => {
            commands::meals::today(&tracker).await?;
        }
        Command::Ask { message } => {
            commands::coach::ask(&tracker, &message).await?;
        }
        Command::Session => {
            commands::session::run(&tracker).await?;
        }
    }

    Ok(())
}
