// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Prediction results for the single and batch paths.

use crate::{PredictionMetrics, PredictorError};
use body_metrics::BmiCategory;
use feature_table::{write_predictions, OutputRow, SubjectTable};
use std::fmt;
use std::io::Write;

// ── Single prediction ──────────────────────────────────────────

/// The response to one single-subject request.
///
/// Values are kept at full precision; [`fmt::Display`] rounds calories and
/// BMI to two decimals.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinglePrediction {
    /// Estimated kilocalories burned.
    pub calories: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    pub advice: &'static str,
}

impl SinglePrediction {
    /// Calories rounded to two decimals, as displayed.
    pub fn calories_display(&self) -> String {
        format!("{:.2}", self.calories)
    }

    /// BMI rounded to two decimals, as displayed.
    pub fn bmi_display(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}

impl fmt::Display for SinglePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔥 Estimated Calories Burned: {} kcal", self.calories_display())?;
        writeln!(f, "💡 BMI: {} ({})", self.bmi_display(), self.category)?;
        write!(f, "{}", self.advice)
    }
}

// ── Batch prediction ───────────────────────────────────────────

/// The response to one uploaded table: the table itself plus one
/// [`OutputRow`] per input row, in input order.
#[derive(Debug, Clone)]
pub struct BatchPrediction {
    table: SubjectTable,
    rows: Vec<OutputRow>,
    /// Timing for this request.
    pub metrics: PredictionMetrics,
}

impl BatchPrediction {
    pub(crate) fn new(table: SubjectTable, rows: Vec<OutputRow>, metrics: PredictionMetrics) -> Self {
        debug_assert_eq!(table.len(), rows.len());
        Self {
            table,
            rows,
            metrics,
        }
    }

    /// The validated input table.
    pub fn table(&self) -> &SubjectTable {
        &self.table
    }

    /// Derived values, aligned 1:1 with [`Self::table`] rows.
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Predicted calories in row order.
    pub fn calories(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.predicted_calories)
    }

    /// Mean predicted calories across the table.
    pub fn mean_calories(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.calories().sum::<f64>() / self.rows.len() as f64
    }

    /// Writes the downloadable CSV: uploaded columns followed by `BMI`,
    /// `BMI_Category` and `Predicted_Calories`.
    pub fn write_csv<W: Write>(&self, writer: W, delimiter: u8) -> Result<(), PredictorError> {
        write_predictions(writer, &self.table, &self.rows, delimiter)?;
        Ok(())
    }

    /// Renders the downloadable CSV into memory.
    pub fn to_csv_bytes(&self, delimiter: u8) -> Result<Vec<u8>, PredictorError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf, delimiter)?;
        Ok(buf)
    }
}
