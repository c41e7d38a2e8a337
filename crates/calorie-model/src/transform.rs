// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Training-time target transforms and their inverses.

use std::fmt;

/// The transform that was applied to the label before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTransform {
    /// Model was fitted on `sqrt(calories)`; predictions are squared.
    #[default]
    Sqrt,
    /// Model was fitted on raw calories.
    Identity,
}

impl TargetTransform {
    /// Maps a raw model output back to kilocalories.
    ///
    /// Squaring erases the sign: `-x` and `x` give the same result.
    pub fn inverse(&self, raw: f64) -> f64 {
        match self {
            Self::Sqrt => raw * raw,
            Self::Identity => raw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for TargetTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_inverse_squares() {
        assert_eq!(TargetTransform::Sqrt.inverse(12.0), 144.0);
        assert_eq!(TargetTransform::Sqrt.inverse(-12.0), 144.0);
    }

    #[test]
    fn test_identity_inverse() {
        assert_eq!(TargetTransform::Identity.inverse(-3.5), -3.5);
    }

    #[test]
    fn test_default_is_sqrt() {
        assert_eq!(TargetTransform::default(), TargetTransform::Sqrt);
        let t: TargetTransform = serde_json::from_str("\"identity\"").unwrap();
        assert_eq!(t, TargetTransform::Identity);
    }
}
