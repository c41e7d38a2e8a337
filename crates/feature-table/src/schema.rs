// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Column names shared by the CSV contract and the model artifact.
//!
//! The names and their order are a fixed contract with the trained model.

pub const GENDER: &str = "Gender";
pub const AGE: &str = "Age";
pub const HEIGHT: &str = "Height";
pub const WEIGHT: &str = "Weight";
pub const DURATION: &str = "Duration";
pub const HEART_RATE: &str = "Heart_Rate";
pub const BODY_TEMP: &str = "Body_Temp";
pub const BMI: &str = "BMI";
pub const BMI_CATEGORY: &str = "BMI_Category";
pub const PREDICTED_CALORIES: &str = "Predicted_Calories";

/// Columns an uploaded table must provide.
pub const INPUT_COLUMNS: [&str; 7] = [
    GENDER, AGE, HEIGHT, WEIGHT, DURATION, HEART_RATE, BODY_TEMP,
];

/// Columns handed to the model, in order.
pub const FEATURE_COLUMNS: [&str; 9] = [
    GENDER,
    AGE,
    HEIGHT,
    WEIGHT,
    DURATION,
    HEART_RATE,
    BODY_TEMP,
    BMI,
    BMI_CATEGORY,
];

/// Feature columns carrying category labels rather than numbers.
pub const CATEGORICAL_COLUMNS: [&str; 2] = [GENDER, BMI_CATEGORY];

/// Columns appended to an uploaded table on export.
pub const OUTPUT_COLUMNS: [&str; 3] = [BMI, BMI_CATEGORY, PREDICTED_CALORIES];

/// Returns `true` if `name` is a categorical feature column.
pub fn is_categorical(name: &str) -> bool {
    CATEGORICAL_COLUMNS.contains(&name)
}

/// Every label a categorical column can hold, or `None` for numeric columns.
pub fn known_labels(name: &str) -> Option<Vec<&'static str>> {
    match name {
        GENDER => Some(vec![
            body_metrics::Gender::Male.as_str(),
            body_metrics::Gender::Female.as_str(),
        ]),
        BMI_CATEGORY => Some(
            body_metrics::BmiCategory::ALL
                .iter()
                .map(|c| c.as_str())
                .collect(),
        ),
        _ => None,
    }
}

/// Position of `name` in [`FEATURE_COLUMNS`].
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|&c| c == name)
}
