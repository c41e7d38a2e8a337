// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the prediction adapter.

/// Errors that can occur while loading the model or serving a prediction.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// The model artifact could not be loaded, or rejected a request.
    #[error("model error: {0}")]
    ModelError(#[from] calorie_model::ModelError),

    /// An uploaded table failed schema or value validation.
    #[error("invalid table: {0}")]
    TableError(#[from] feature_table::TableError),

    /// A single subject's inputs are out of domain.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] body_metrics::MetricsError),

    /// The model returned a different number of scores than rows given.
    #[error("model returned {actual} predictions for {expected} rows")]
    RowCountMismatch { expected: usize, actual: usize },

    /// The model produced NaN or infinity.
    #[error("model produced a non-finite score ({value}) for row {row}")]
    NonFinitePrediction { row: usize, value: f64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
