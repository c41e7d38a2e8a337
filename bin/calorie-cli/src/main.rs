// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # calorie
//!
//! Command-line interface for the calorie-burn predictor.
//!
//! ## Usage
//! ```bash
//! # Score one workout
//! calorie predict --gender female --age 30 --height 160 --weight 60 \
//!     --duration 30 --heart-rate 105 --body-temp 37.8
//!
//! # Score uploaded tables
//! calorie batch workouts.csv --output calorie_predictions.csv
//!
//! # Get a template upload
//! calorie sample --output sample.csv
//!
//! # Inspect the model artifact
//! calorie inspect --model ./models/calorie_predictor.json
//! ```

mod commands;

use body_metrics::{Gender, SubjectRecord};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "calorie",
    about = "Estimate calories burned during a workout",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the model artifact (overrides the config file).
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict calories burned for a single workout.
    Predict {
        /// Male or Female.
        #[arg(long, default_value = "Male")]
        gender: Gender,

        /// Age in years (10-100).
        #[arg(long, default_value_t = 25)]
        age: u32,

        /// Height in centimetres (100-250).
        #[arg(long, default_value_t = 170.0)]
        height: f64,

        /// Weight in kilograms (30-200).
        #[arg(long, default_value_t = 70.0)]
        weight: f64,

        /// Exercise duration in minutes (1-180).
        #[arg(long, default_value_t = 30)]
        duration: u32,

        /// Average heart rate in bpm (60-200).
        #[arg(long, default_value_t = 100)]
        heart_rate: u32,

        /// Body temperature in °C (35-45).
        #[arg(long, default_value_t = 37.0)]
        body_temp: f64,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Predict calories for every row of one or more CSV files.
    Batch {
        /// CSV files with columns Gender, Age, Height, Weight, Duration,
        /// Heart_Rate, Body_Temp.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (single input only).
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,

        /// Directory for `<name>_predictions.csv` outputs.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Print or save a sample CSV upload.
    Sample {
        /// Write to this path instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect the model artifact: encoders, estimator and metadata.
    Inspect,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Predict {
            gender,
            age,
            height,
            weight,
            duration,
            heart_rate,
            body_temp,
            json,
        } => {
            let config = commands::load_config(cli.config.as_deref(), cli.model)?;
            let subject = SubjectRecord {
                gender,
                age,
                height_cm: height,
                weight_kg: weight,
                duration_min: duration,
                heart_rate_bpm: heart_rate,
                body_temp_c: body_temp,
            };
            commands::predict::execute(config, subject, json).await
        }
        Commands::Batch {
            files,
            output,
            output_dir,
        } => {
            let config = commands::load_config(cli.config.as_deref(), cli.model)?;
            commands::batch::execute(config, files, output, output_dir).await
        }
        Commands::Sample { output } => commands::sample::execute(output).await,
        Commands::Inspect => {
            let config = commands::load_config(cli.config.as_deref(), cli.model)?;
            commands::inspect::execute(config).await
        }
    }
}
