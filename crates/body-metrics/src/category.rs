// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! BMI bands and the advice shown for each.
//!
//! Bands are half-open and checked top to bottom:
//!
//! ```text
//!   bmi < 18.5          → Underweight
//!   18.5 <= bmi < 25    → Normal
//!   25   <= bmi < 30    → Overweight
//!   otherwise           → Obese
//! ```

use crate::MetricsError;
use std::fmt;
use std::str::FromStr;

/// Lower edge of the `Normal` band.
const NORMAL_MIN: f64 = 18.5;
/// Lower edge of the `Overweight` band.
const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower edge of the `Obese` band.
const OBESE_MIN: f64 = 30.0;

/// Ordinal BMI category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending order.
    pub const ALL: [BmiCategory; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Classifies a BMI value. NaN falls through to `Obese`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            Self::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Parses a category label, ignoring case and surrounding whitespace.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Some(Self::Underweight),
            "normal" => Some(Self::Normal),
            "overweight" => Some(Self::Overweight),
            "obese" => Some(Self::Obese),
            _ => None,
        }
    }

    /// The label used in feature rows and CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Fixed guidance text for this category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Underweight => "⚠️ Your BMI is low. Consider a healthy diet.",
            Self::Normal => "✅ Healthy BMI range. Keep it up!",
            Self::Overweight => "⚠️ You are overweight. Exercise more & eat balanced meals.",
            Self::Obese => "❗ Obese. Consult a doctor/fitness expert for a plan.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| MetricsError::InvalidCategory(s.to_string()))
    }
}
