// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subject records: the raw per-person inputs to a prediction.
//!
//! A [`SubjectRecord`] is ephemeral. It is built for one request (single
//! mode) or one CSV row (batch mode) and never persisted. Each numeric field
//! has a documented domain in [`FieldBounds`]; [`SubjectRecord::validate`]
//! enforces them.

use crate::{calculate_bmi, BmiCategory, MetricsError};
use std::fmt;
use std::str::FromStr;

// ── Gender ─────────────────────────────────────────────────────

/// Subject gender as the model was trained on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses a gender label. Accepts `male`/`m` and `female`/`f`, any case.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// The label used in feature rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| MetricsError::InvalidGender(s.to_string()))
    }
}

// ── Field bounds ───────────────────────────────────────────────

/// Inclusive domain of one numeric input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Column name as it appears in the CSV contract.
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub const AGE: Self = Self::new("Age", 10.0, 100.0);
    pub const HEIGHT: Self = Self::new("Height", 100.0, 250.0);
    pub const WEIGHT: Self = Self::new("Weight", 30.0, 200.0);
    pub const DURATION: Self = Self::new("Duration", 1.0, 180.0);
    pub const HEART_RATE: Self = Self::new("Heart_Rate", 60.0, 200.0);
    pub const BODY_TEMP: Self = Self::new("Body_Temp", 35.0, 45.0);

    /// All numeric bounds in feature order.
    pub const ALL: [Self; 6] = [
        Self::AGE,
        Self::HEIGHT,
        Self::WEIGHT,
        Self::DURATION,
        Self::HEART_RATE,
        Self::BODY_TEMP,
    ];

    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Returns `true` if `value` is finite and within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Checks `value` against this domain.
    pub fn check(&self, value: f64) -> Result<(), MetricsError> {
        if !value.is_finite() {
            return Err(MetricsError::NotFinite { field: self.field });
        }
        if !self.contains(value) {
            return Err(MetricsError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

// ── SubjectRecord ──────────────────────────────────────────────

/// One subject's demographic and workout inputs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubjectRecord {
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    /// Height in centimetres.
    pub height_cm: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Workout duration in whole minutes.
    pub duration_min: u32,
    /// Average heart rate in beats per minute.
    pub heart_rate_bpm: u32,
    /// Body temperature in degrees Celsius.
    pub body_temp_c: f64,
}

impl SubjectRecord {
    /// Returns the first domain violation, if any.
    pub fn validate(&self) -> Result<(), MetricsError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns every domain violation, in feature order.
    pub fn violations(&self) -> Vec<MetricsError> {
        self.numeric_fields()
            .iter()
            .zip(FieldBounds::ALL.iter())
            .filter_map(|(&value, bounds)| bounds.check(value).err())
            .collect()
    }

    /// Numeric fields in feature order (Age, Height, Weight, Duration,
    /// Heart_Rate, Body_Temp).
    pub fn numeric_fields(&self) -> [f64; 6] {
        [
            self.age as f64,
            self.height_cm,
            self.weight_kg,
            self.duration_min as f64,
            self.heart_rate_bpm as f64,
            self.body_temp_c,
        ]
    }

    /// Derived body-mass index.
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.weight_kg, self.height_cm)
    }

    /// Derived BMI category.
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }
}

impl Default for SubjectRecord {
    /// The initial values of the single-prediction form.
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 25,
            height_cm: 170.0,
            weight_kg: 70.0,
            duration_min: 30,
            heart_rate_bpm: 100,
            body_temp_c: 37.0,
        }
    }
}
