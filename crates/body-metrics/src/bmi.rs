// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Body-mass index.

/// Computes BMI as `weight / (height_in_metres)^2`.
///
/// `height_cm` must be non-zero; callers keep it inside
/// [`FieldBounds::HEIGHT`](crate::FieldBounds::HEIGHT).
///
/// # Examples
/// ```
/// let bmi = body_metrics::calculate_bmi(70.0, 175.0);
/// assert!((bmi - 22.857142857142858).abs() < 1e-9);
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
