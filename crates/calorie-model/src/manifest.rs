// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON model artifact format.
//!
//! # Format
//! ```json
//! {
//!   "name": "calorie-predictor",
//!   "target_transform": "sqrt",
//!   "features": ["Gender", "Age", "Height", "Weight", "Duration",
//!                "Heart_Rate", "Body_Temp", "BMI", "BMI_Category"],
//!   "encoders": [
//!     { "column": "Gender", "kind": "one_hot", "categories": ["Female", "Male"], "drop": "Female" },
//!     { "column": "Age", "kind": "numeric", "center": 42.79, "scale": 16.98 },
//!     ...
//!   ],
//!   "estimator": { "kind": "linear", "intercept": 8.85, "coefficients": [ ... ] }
//! }
//! ```
//!
//! Encoders appear once per feature, in feature order. Their outputs are
//! concatenated into the estimator's input row.

use crate::{ModelError, TargetTransform, Tree};
use feature_table::schema;
use std::collections::HashSet;
use std::path::Path;

/// Top-level model artifact.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelManifest {
    /// Human-readable model name.
    pub name: String,
    /// Free-form provenance notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label transform used when fitting.
    #[serde(default)]
    pub target_transform: TargetTransform,
    /// Input column contract, in order.
    pub features: Vec<String>,
    /// One encoder per feature, in feature order.
    pub encoders: Vec<EncoderSpec>,
    pub estimator: EstimatorSpec,
}

/// How one feature column becomes one or more numeric columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncoderSpec {
    /// `(x - center) / scale`.
    Numeric {
        column: String,
        #[serde(default)]
        center: f64,
        #[serde(default = "default_one")]
        scale: f64,
    },
    /// One indicator per category, minus the optional `drop` baseline.
    OneHot {
        column: String,
        categories: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drop: Option<String>,
    },
    /// The category's position in `categories`.
    Ordinal {
        column: String,
        categories: Vec<String>,
    },
}

/// The fitted estimator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorSpec {
    /// `intercept + coefficients · x`.
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    /// Regression trees combined by `aggregation`.
    TreeEnsemble {
        #[serde(default)]
        aggregation: Aggregation,
        /// Starting score for boosted ensembles.
        #[serde(default)]
        init: f64,
        /// Shrinkage applied to each boosted tree.
        #[serde(default = "default_one")]
        learning_rate: f64,
        trees: Vec<Tree>,
    },
}

/// How tree outputs are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Gradient boosting: `init + learning_rate * Σ tree(x)`.
    #[default]
    Sum,
    /// Bagging / random forest: `Σ tree(x) / n_trees`.
    Mean,
}

fn default_one() -> f64 {
    1.0
}

impl EncoderSpec {
    /// The feature column this encoder consumes.
    pub fn column(&self) -> &str {
        match self {
            Self::Numeric { column, .. }
            | Self::OneHot { column, .. }
            | Self::Ordinal { column, .. } => column,
        }
    }

    /// Number of numeric columns this encoder produces.
    pub fn width(&self) -> usize {
        match self {
            Self::Numeric { .. } | Self::Ordinal { .. } => 1,
            Self::OneHot {
                categories, drop, ..
            } => categories.len().saturating_sub(usize::from(drop.is_some())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Numeric { .. } => "numeric",
            Self::OneHot { .. } => "one_hot",
            Self::Ordinal { .. } => "ordinal",
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let column = self.column();
        let invalid = |detail: String| ModelError::InvalidEncoder {
            column: column.to_string(),
            detail,
        };

        let categorical = schema::is_categorical(column);
        match self {
            Self::Numeric { center, scale, .. } => {
                if categorical {
                    return Err(invalid("categorical column needs one_hot or ordinal".into()));
                }
                if !center.is_finite() || !scale.is_finite() || *scale == 0.0 {
                    return Err(invalid(format!(
                        "center/scale must be finite with non-zero scale (got {center}/{scale})"
                    )));
                }
            }
            Self::OneHot {
                categories, drop, ..
            } => {
                check_categories(column, categorical, categories).map_err(invalid)?;
                if let Some(baseline) = drop {
                    if !categories.contains(baseline) {
                        return Err(invalid(format!(
                            "dropped category '{baseline}' is not among the categories"
                        )));
                    }
                }
                if self.width() == 0 {
                    return Err(invalid("encoder produces no columns".into()));
                }
            }
            Self::Ordinal { categories, .. } => {
                check_categories(column, categorical, categories).map_err(invalid)?;
            }
        }
        Ok(())
    }
}

fn check_categories(column: &str, categorical: bool, categories: &[String]) -> Result<(), String> {
    if !categorical {
        return Err("numeric column cannot use a categorical encoder".into());
    }
    if categories.is_empty() {
        return Err("no categories listed".into());
    }
    let mut seen = HashSet::new();
    for c in categories {
        if !seen.insert(c.as_str()) {
            return Err(format!("duplicate category '{c}'"));
        }
    }
    if let Some(labels) = schema::known_labels(column) {
        for label in labels.into_iter().filter(|l| !seen.contains(l)) {
            tracing::warn!("column '{column}': label '{label}' was not seen in training");
        }
    }
    Ok(())
}

impl EstimatorSpec {
    /// Number of input columns the estimator expects, where it is fixed.
    pub fn input_width(&self) -> Option<usize> {
        match self {
            Self::Linear { coefficients, .. } => Some(coefficients.len()),
            Self::TreeEnsemble { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::TreeEnsemble { .. } => "tree_ensemble",
        }
    }

    fn validate(&self, width: usize) -> Result<(), ModelError> {
        match self {
            Self::Linear {
                intercept,
                coefficients,
            } => {
                if coefficients.len() != width {
                    return Err(ModelError::WidthMismatch {
                        expected: coefficients.len(),
                        actual: width,
                    });
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ModelError::InvalidEstimator(
                        "linear model has non-finite parameters".into(),
                    ));
                }
            }
            Self::TreeEnsemble {
                init,
                learning_rate,
                trees,
                ..
            } => {
                if trees.is_empty() {
                    return Err(ModelError::InvalidEstimator("ensemble has no trees".into()));
                }
                if !init.is_finite() || !learning_rate.is_finite() {
                    return Err(ModelError::InvalidEstimator(
                        "init and learning_rate must be finite".into(),
                    ));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(width).map_err(|e| {
                        ModelError::InvalidEstimator(format!("tree {i}: {e}"))
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl ModelManifest {
    /// Loads an artifact from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Serialises the artifact to pretty JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total encoded row width.
    pub fn encoded_width(&self) -> usize {
        self.encoders.iter().map(EncoderSpec::width).sum()
    }

    /// Validates the artifact against the feature row contract.
    ///
    /// Checks:
    /// - `features` equals the feature row column order exactly.
    /// - One well-formed encoder per feature, in the same order.
    /// - The estimator accepts the encoded width and is structurally sound.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.features.iter().map(String::as_str).ne(schema::FEATURE_COLUMNS) {
            return Err(ModelError::FeatureMismatch {
                expected: self.features.clone(),
                found: schema::FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            });
        }

        if self.encoders.len() != self.features.len() {
            return Err(ModelError::InvalidEncoder {
                column: self.name.clone(),
                detail: format!(
                    "{} encoders for {} features",
                    self.encoders.len(),
                    self.features.len()
                ),
            });
        }

        for (encoder, feature) in self.encoders.iter().zip(&self.features) {
            if encoder.column() != feature {
                return Err(ModelError::InvalidEncoder {
                    column: encoder.column().to_string(),
                    detail: format!("encoder is out of order; expected column '{feature}'"),
                });
            }
            encoder.validate()?;
        }

        self.estimator.validate(self.encoded_width())
    }
}
