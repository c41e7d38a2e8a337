// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # predictor
//!
//! The prediction adapter: bridges subject records to the trained model and
//! undoes the model's training-time target transform.
//!
//! The predictor takes:
//! - A [`PredictorConfig`] naming the model artifact and input policy.
//! - A model implementing [`calorie_model::Regressor`], loaded once.
//!
//! And produces a [`SinglePrediction`] for one subject or a
//! [`BatchPrediction`] for a whole uploaded table.
//!
//! # Type-State Pipeline
//! ```text
//! CaloriePredictor<Unloaded> → load_model() → CaloriePredictor<Ready>
//! ```
//! A predictor can only serve requests once its model is loaded, and the
//! model never changes afterwards.

mod config;
mod engine;
mod error;
mod metrics;
mod output;

pub use config::PredictorConfig;
pub use engine::{CaloriePredictor, PredictorState, Ready, Unloaded};
pub use error::PredictorError;
pub use metrics::PredictionMetrics;
pub use output::{BatchPrediction, SinglePrediction};
