// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Turns feature rows into the numeric design matrix an estimator reads.

use crate::{EncoderSpec, ModelError};
use feature_table::{FeatureRow, FeatureTable, FeatureValue, FEATURE_COLUMNS};
use ndarray::Array2;

/// Column-wise encoder built from a validated [`ModelManifest`](crate::ModelManifest).
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    specs: Vec<EncoderSpec>,
    width: usize,
}

impl FeatureEncoder {
    /// Builds an encoder. `specs` must be in feature order, one per column.
    pub fn new(specs: Vec<EncoderSpec>) -> Self {
        let width = specs.iter().map(EncoderSpec::width).sum();
        Self { specs, width }
    }

    /// Number of numeric columns produced per row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn specs(&self) -> &[EncoderSpec] {
        &self.specs
    }

    /// Encodes a whole table into an `n_rows × width` matrix.
    pub fn encode(&self, table: &FeatureTable) -> Result<Array2<f64>, ModelError> {
        let mut data = vec![0.0; table.len() * self.width];
        if self.width > 0 {
            for (chunk, row) in data.chunks_exact_mut(self.width).zip(table.iter()) {
                self.encode_row(row, chunk)?;
            }
        }
        Array2::from_shape_vec((table.len(), self.width), data).map_err(|e| {
            ModelError::UnexpectedValue {
                column: "*".into(),
                detail: format!("design matrix shape: {e}"),
            }
        })
    }

    /// Encodes one row into `out`, which must be exactly [`width`](Self::width) long.
    pub fn encode_row(&self, row: &FeatureRow, out: &mut [f64]) -> Result<(), ModelError> {
        if out.len() != self.width {
            return Err(ModelError::WidthMismatch {
                expected: self.width,
                actual: out.len(),
            });
        }

        let mut offset = 0;
        for ((spec, value), column) in self.specs.iter().zip(row.values()).zip(FEATURE_COLUMNS) {
            let width = spec.width();
            encode_cell(spec, column, value, &mut out[offset..offset + width])?;
            offset += width;
        }
        Ok(())
    }
}

fn encode_cell(
    spec: &EncoderSpec,
    column: &str,
    value: FeatureValue,
    out: &mut [f64],
) -> Result<(), ModelError> {
    match spec {
        EncoderSpec::Numeric { center, scale, .. } => {
            let x = value.as_number().ok_or_else(|| ModelError::UnexpectedValue {
                column: column.to_string(),
                detail: format!("expected a number, got '{value}'"),
            })?;
            out[0] = (x - center) / scale;
        }
        EncoderSpec::OneHot {
            categories, drop, ..
        } => {
            let label = expect_label(column, value)?;
            let position = find_category(column, categories, label)?;
            let kept = categories
                .iter()
                .filter(|c| Some(*c) != drop.as_ref());
            for (slot, category) in out.iter_mut().zip(kept) {
                *slot = if category == &categories[position] { 1.0 } else { 0.0 };
            }
        }
        EncoderSpec::Ordinal { categories, .. } => {
            let label = expect_label(column, value)?;
            out[0] = find_category(column, categories, label)? as f64;
        }
    }
    Ok(())
}

fn expect_label(column: &str, value: FeatureValue) -> Result<&'static str, ModelError> {
    value.as_text().ok_or_else(|| ModelError::UnexpectedValue {
        column: column.to_string(),
        detail: format!("expected a category label, got {value}"),
    })
}

fn find_category(column: &str, categories: &[String], label: &str) -> Result<usize, ModelError> {
    categories
        .iter()
        .position(|c| c == label)
        .ok_or_else(|| ModelError::UnknownCategory {
            column: column.to_string(),
            value: label.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelManifest;
    use body_metrics::{Gender, SubjectRecord};

    fn encoder() -> FeatureEncoder {
        let m = ModelManifest::from_json(crate::manifest::tests::linear_manifest_json()).unwrap();
        FeatureEncoder::new(m.encoders)
    }

    fn row(gender: Gender, weight_kg: f64) -> FeatureRow {
        FeatureRow::from_subject(&SubjectRecord {
            gender,
            age: 25,
            height_cm: 175.0,
            weight_kg,
            duration_min: 45,
            heart_rate_bpm: 120,
            body_temp_c: 38.0,
        })
    }

    #[test]
    fn test_encode_reference_row() {
        let enc = encoder();
        assert_eq!(enc.width(), 11);

        let mut out = vec![0.0; 11];
        enc.encode_row(&row(Gender::Male, 70.0), &mut out).unwrap();
        assert_eq!(&out[..7], &[1.0, 25.0, 175.0, 70.0, 45.0, 120.0, 38.0]);
        assert!((out[7] - 22.857142857).abs() < 1e-9);
        // Normal is the dropped baseline.
        assert_eq!(&out[8..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_columns() {
        let enc = encoder();
        let mut out = vec![0.0; 11];
        // 110 kg at 175 cm → BMI 35.9 → Obese.
        enc.encode_row(&row(Gender::Female, 110.0), &mut out).unwrap();
        assert_eq!(out[0], 0.0);
        assert_eq!(&out[8..], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scaling() {
        let enc = FeatureEncoder::new(
            ModelManifest::from_json(crate::manifest::tests::linear_manifest_json())
                .unwrap()
                .encoders
                .into_iter()
                .map(|spec| match spec {
                    EncoderSpec::Numeric { column, .. } if column == "Age" => EncoderSpec::Numeric {
                        column,
                        center: 20.0,
                        scale: 5.0,
                    },
                    other => other,
                })
                .collect(),
        );
        let mut out = vec![0.0; 11];
        enc.encode_row(&row(Gender::Male, 70.0), &mut out).unwrap();
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn test_unknown_category() {
        let mut specs = encoder().specs().to_vec();
        specs[0] = EncoderSpec::OneHot {
            column: "Gender".into(),
            categories: vec!["Male".into()],
            drop: None,
        };
        let enc = FeatureEncoder::new(specs);
        let mut out = vec![0.0; enc.width()];
        let err = enc.encode_row(&row(Gender::Female, 70.0), &mut out).unwrap_err();
        match err {
            ModelError::UnknownCategory { column, value } => {
                assert_eq!(column, "Gender");
                assert_eq!(value, "Female");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_ordinal() {
        let mut specs = encoder().specs().to_vec();
        specs[8] = EncoderSpec::Ordinal {
            column: "BMI_Category".into(),
            categories: vec![
                "Underweight".into(),
                "Normal".into(),
                "Overweight".into(),
                "Obese".into(),
            ],
        };
        let enc = FeatureEncoder::new(specs);
        assert_eq!(enc.width(), 9);
        let mut out = vec![0.0; 9];
        enc.encode_row(&row(Gender::Male, 70.0), &mut out).unwrap();
        assert_eq!(out[8], 1.0);
    }

    #[test]
    fn test_wrong_output_width() {
        let mut out = vec![0.0; 3];
        assert!(matches!(
            encoder().encode_row(&row(Gender::Male, 70.0), &mut out),
            Err(ModelError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn test_encode_table_preserves_order() {
        let table = FeatureTable::from_rows(vec![row(Gender::Male, 70.0), row(Gender::Female, 60.0)]);
        let m = encoder().encode(&table).unwrap();
        assert_eq!(m.dim(), (2, 11));
        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[1, 0]], 0.0);
        assert_eq!(m[[1, 3]], 60.0);
    }
}
