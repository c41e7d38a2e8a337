// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Prediction timing metrics.

use std::time::Duration;

/// Aggregate metrics for one prediction request.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct PredictionMetrics {
    /// Rows scored.
    pub rows: usize,
    /// Time spent building feature rows (BMI and category derivation).
    pub feature_duration: Duration,
    /// Time spent inside the model's `predict` call.
    pub model_duration: Duration,
    /// Total wall-clock time for the request.
    pub total_duration: Duration,
    /// Rows whose raw model output was negative before squaring.
    pub negative_raw_outputs: usize,
}

impl PredictionMetrics {
    /// Returns rows per second throughput.
    pub fn rows_per_second(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs <= 0.0 || self.rows == 0 {
            return 0.0;
        }
        self.rows as f64 / secs
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let mut s = format!(
            "Prediction: {} rows in {:.3}ms ({:.3}ms features, {:.3}ms model, {:.0} rows/s)",
            self.rows,
            self.total_duration.as_secs_f64() * 1000.0,
            self.feature_duration.as_secs_f64() * 1000.0,
            self.model_duration.as_secs_f64() * 1000.0,
            self.rows_per_second(),
        );
        if self.negative_raw_outputs > 0 {
            s.push_str(&format!(
                ", {} negative raw outputs",
                self.negative_raw_outputs
            ));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let m = PredictionMetrics {
            rows: 500,
            total_duration: Duration::from_millis(250),
            ..Default::default()
        };
        assert!((m.rows_per_second() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_is_zero_throughput() {
        let m = PredictionMetrics {
            rows: 3,
            ..Default::default()
        };
        assert_eq!(m.rows_per_second(), 0.0);
    }

    #[test]
    fn test_summary_mentions_negative_outputs_only_when_present() {
        let mut m = PredictionMetrics {
            rows: 2,
            ..Default::default()
        };
        assert!(m.summary().starts_with("Prediction: 2 rows"));
        assert!(!m.summary().contains("negative"));
        m.negative_raw_outputs = 1;
        assert!(m.summary().contains("1 negative raw outputs"));
    }
}
