// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The prediction adapter with a type-state–enforced model lifecycle.
//!
//! ```text
//! CaloriePredictor<Unloaded>
//!     │  .load_model()
//!     ▼
//! CaloriePredictor<Ready>
//!     │  .predict_one() / .predict_table()
//!     ▼
//!   SinglePrediction / BatchPrediction
//! ```
//!
//! Both request paths go through [`CaloriePredictor::predict_features`]:
//! a single subject is scored as a one-row table, so single and batch
//! results for the same subject are identical.

use crate::{BatchPrediction, PredictionMetrics, PredictorConfig, PredictorError, SinglePrediction};
use body_metrics::{MetricsError, SubjectRecord};
use calorie_model::{ModelLoader, Regressor, TargetTransform};
use feature_table::{FeatureRow, FeatureTable, OutputRow, RowError, SubjectTable, TableError};
use std::sync::Arc;
use std::time::Instant;

// ── Type-state markers ─────────────────────────────────────────

/// Predictor is configured but no model is loaded.
#[derive(Debug, Clone)]
pub struct Unloaded;

/// Model is loaded; the predictor can serve requests.
#[derive(Clone)]
pub struct Ready {
    model: Arc<dyn Regressor>,
}

impl std::fmt::Debug for Ready {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ready")
            .field("model", &self.model.name())
            .finish()
    }
}

/// Sealed trait for predictor states.
pub trait PredictorState: std::fmt::Debug {}
impl PredictorState for Unloaded {}
impl PredictorState for Ready {}

// ── Predictor ──────────────────────────────────────────────────

/// The calorie predictor.
///
/// `S` is a type-state marker: `predict_*` exists only on
/// `CaloriePredictor<Ready>`, and a ready predictor's model cannot be
/// replaced.
///
/// # Example
/// ```no_run
/// use predictor::{CaloriePredictor, PredictorConfig};
/// use body_metrics::SubjectRecord;
///
/// # fn example() -> Result<(), predictor::PredictorError> {
/// let predictor = CaloriePredictor::new(PredictorConfig::default()).load_model()?;
/// let result = predictor.predict_one(&SubjectRecord::default())?;
/// println!("{result}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CaloriePredictor<S: PredictorState = Unloaded> {
    config: PredictorConfig,
    state: S,
}

// ── Unloaded → Ready ───────────────────────────────────────────

impl CaloriePredictor<Unloaded> {
    /// Creates a predictor from the given configuration.
    pub fn new(config: PredictorConfig) -> Self {
        tracing::debug!("predictor created for '{}'", config.model_path.display());
        Self {
            config,
            state: Unloaded,
        }
    }

    /// Loads and validates the model artifact named by the config.
    /// Transitions to the `Ready` state.
    pub fn load_model(self) -> Result<CaloriePredictor<Ready>, PredictorError> {
        self.config.delimiter_byte()?;
        let model = ModelLoader::load(&self.config.model_path)?;
        Ok(Self::from_regressor(self.config, Arc::new(model)))
    }

    /// Wraps an already-constructed model (tests, alternative back ends).
    pub fn from_regressor(
        config: PredictorConfig,
        model: Arc<dyn Regressor>,
    ) -> CaloriePredictor<Ready> {
        tracing::debug!("predictor ready with model '{}'", model.name());
        CaloriePredictor {
            config,
            state: Ready { model },
        }
    }
}

// ── Ready: serving requests ────────────────────────────────────

impl CaloriePredictor<Ready> {
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// The loaded model, shared read-only.
    pub fn model(&self) -> &Arc<dyn Regressor> {
        &self.state.model
    }

    /// Scores one subject.
    ///
    /// Inputs are checked against their documented domain first. With
    /// `strict_bounds = false`, out-of-range values are logged and scored.
    pub fn predict_one(&self, subject: &SubjectRecord) -> Result<SinglePrediction, PredictorError> {
        self.check_subject(subject)?;

        let row = FeatureRow::from_subject(subject);
        let (bmi, category) = (row.bmi, row.bmi_category);
        tracing::debug!("single request: BMI {bmi:.2} ({category})");

        let (calories, _) = self.predict_features(&FeatureTable::single(row))?;
        let calories = calories.into_iter().next().ok_or(PredictorError::RowCountMismatch {
            expected: 1,
            actual: 0,
        })?;

        Ok(SinglePrediction {
            calories,
            bmi,
            category,
            advice: category.advice(),
        })
    }

    /// Scores a table with one model call over all rows.
    ///
    /// Every subject is held to the same bounds policy as [`Self::predict_one`];
    /// any offending row rejects the whole table.
    pub fn predict_table(&self, table: &SubjectTable) -> Result<BatchPrediction, PredictorError> {
        let start = Instant::now();
        self.check_table(table)?;

        let features = table.feature_table();
        let feature_duration = start.elapsed();

        let model_start = Instant::now();
        let (calories, negative_raw_outputs) = self.predict_features(&features)?;
        let model_duration = model_start.elapsed();

        let rows: Vec<OutputRow> = features
            .iter()
            .zip(calories)
            .map(|(row, predicted_calories)| OutputRow {
                bmi: row.bmi,
                bmi_category: row.bmi_category,
                predicted_calories,
            })
            .collect();

        let metrics = PredictionMetrics {
            rows: rows.len(),
            feature_duration,
            model_duration,
            total_duration: start.elapsed(),
            negative_raw_outputs,
        };
        tracing::info!("{}", metrics.summary());

        Ok(BatchPrediction::new(table.clone(), rows, metrics))
    }

    /// Parses, validates and scores a CSV upload using the configured
    /// delimiter and bounds policy.
    pub fn predict_csv<R: std::io::Read>(&self, reader: R) -> Result<BatchPrediction, PredictorError> {
        let table = SubjectTable::from_reader(reader, &self.config.table_options()?)?;
        self.predict_table(&table)
    }

    /// Runs the model over `features` and inverts its target transform.
    ///
    /// Returns kilocalories aligned with the input rows, plus the number of
    /// rows whose raw output was negative.
    pub fn predict_features(&self, features: &FeatureTable) -> Result<(Vec<f64>, usize), PredictorError> {
        let model = self.model();
        let raw = model.predict(features)?;
        if raw.len() != features.len() {
            return Err(PredictorError::RowCountMismatch {
                expected: features.len(),
                actual: raw.len(),
            });
        }

        let transform = model.target_transform();
        let mut negatives = 0;
        let mut calories = Vec::with_capacity(raw.len());
        for (i, &value) in raw.iter().enumerate() {
            if !value.is_finite() {
                return Err(PredictorError::NonFinitePrediction { row: i + 1, value });
            }
            if value < 0.0 && transform == TargetTransform::Sqrt {
                negatives += 1;
                tracing::warn!(
                    "row {}: raw model output {value} is negative; squaring discards the sign",
                    i + 1
                );
            }
            calories.push(transform.inverse(value));
        }

        tracing::debug!(
            "model '{}' scored {} rows (transform '{}')",
            model.name(),
            calories.len(),
            transform
        );
        Ok((calories, negatives))
    }

    fn check_table(&self, table: &SubjectTable) -> Result<(), PredictorError> {
        let strict = self.config.strict_bounds;
        let errors: Vec<RowError> = table
            .subjects()
            .iter()
            .enumerate()
            .flat_map(|(i, subject)| {
                subject
                    .violations()
                    .into_iter()
                    .map(move |error| RowError { row: i + 1, error })
            })
            .filter(|e| strict || !matches!(e.error, MetricsError::OutOfRange { .. }))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(TableError::InvalidRows(errors).into())
        }
    }

    fn check_subject(&self, subject: &SubjectRecord) -> Result<(), PredictorError> {
        for violation in subject.violations() {
            match violation {
                MetricsError::OutOfRange { .. } if !self.config.strict_bounds => {
                    tracing::warn!("scoring out-of-domain input: {violation}");
                }
                other => return Err(other.into()),
            }
        }
        Ok(())
    }
}
