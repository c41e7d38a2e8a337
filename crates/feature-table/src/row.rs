// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single model input row.

use crate::schema::FEATURE_COLUMNS;
use body_metrics::{BmiCategory, Gender, SubjectRecord};
use std::fmt;

/// One cell of a feature row: categorical fields carry their label,
/// everything else is numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Text(&'static str),
    Number(f64),
}

impl FeatureValue {
    /// Returns the numeric value, if this is a numeric cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the label, if this is a categorical cell.
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
        }
    }
}

/// A subject record with its derived BMI fields, ready for the model.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FeatureRow {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub duration_min: u32,
    pub heart_rate_bpm: u32,
    pub body_temp_c: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

impl FeatureRow {
    /// Derives BMI and its category and assembles the row.
    pub fn from_subject(subject: &SubjectRecord) -> Self {
        let bmi = subject.bmi();
        Self {
            gender: subject.gender,
            age: subject.age,
            height_cm: subject.height_cm,
            weight_kg: subject.weight_kg,
            duration_min: subject.duration_min,
            heart_rate_bpm: subject.heart_rate_bpm,
            body_temp_c: subject.body_temp_c,
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
        }
    }

    /// Cell values in [`FEATURE_COLUMNS`] order.
    pub fn values(&self) -> [FeatureValue; 9] {
        [
            FeatureValue::Text(self.gender.as_str()),
            FeatureValue::Number(self.age as f64),
            FeatureValue::Number(self.height_cm),
            FeatureValue::Number(self.weight_kg),
            FeatureValue::Number(self.duration_min as f64),
            FeatureValue::Number(self.heart_rate_bpm as f64),
            FeatureValue::Number(self.body_temp_c),
            FeatureValue::Number(self.bmi),
            FeatureValue::Text(self.bmi_category.as_str()),
        ]
    }

    /// Looks up a cell by column name.
    pub fn get(&self, column: &str) -> Option<FeatureValue> {
        crate::schema::feature_index(column).map(|i| self.values()[i])
    }

    /// `(column, value)` pairs in model order.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> {
        FEATURE_COLUMNS.into_iter().zip(self.values())
    }
}
