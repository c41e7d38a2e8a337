// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model loading and evaluation.

/// Errors that can occur when loading or evaluating a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("failed to read model artifact: {0}")]
    ReadError(#[from] std::io::Error),

    /// The artifact JSON is malformed.
    #[error("failed to parse model artifact: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The model's feature columns differ from the feature row contract.
    #[error(
        "feature schema mismatch: model expects [{}], feature rows provide [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// An encoder definition is invalid.
    #[error("invalid encoder for column '{column}': {detail}")]
    InvalidEncoder { column: String, detail: String },

    /// The estimator definition is invalid.
    #[error("invalid estimator: {0}")]
    InvalidEstimator(String),

    /// A categorical value was not seen when the model was fitted.
    #[error("unknown category '{value}' for column '{column}'")]
    UnknownCategory { column: String, value: String },

    /// A cell had the wrong kind (label where a number was expected, or the reverse).
    #[error("unexpected value in column '{column}': {detail}")]
    UnexpectedValue { column: String, detail: String },

    /// The encoded row width does not match the estimator input width.
    #[error("encoded width mismatch: estimator expects {expected} columns, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}
