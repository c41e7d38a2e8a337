// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared setup.

pub mod batch;
pub mod inspect;
pub mod predict;
pub mod sample;

use anyhow::Context;
use predictor::{CaloriePredictor, PredictorConfig, Ready};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the effective configuration: defaults, then the config file,
/// then command-line overrides.
pub fn load_config(config: Option<&Path>, model: Option<PathBuf>) -> anyhow::Result<PredictorConfig> {
    let mut resolved = match config {
        Some(path) => PredictorConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => PredictorConfig::default(),
    };
    if let Some(model) = model {
        resolved.model_path = model;
    }
    tracing::debug!("effective config: {resolved:?}");
    Ok(resolved)
}

/// Loads the model once. Failure here is fatal for every command.
pub fn load_predictor(config: PredictorConfig) -> anyhow::Result<CaloriePredictor<Ready>> {
    let path = config.model_path.clone();
    CaloriePredictor::new(config)
        .load_model()
        .with_context(|| format!("failed to load model from '{}'", path.display()))
}
