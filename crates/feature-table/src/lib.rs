// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # feature-table
//!
//! Builds the fixed-schema rows the calorie model consumes, for a single
//! subject or a whole uploaded table.
//!
//! - [`FeatureRow`]: one subject plus its derived BMI and BMI category, in
//!   the exact column order the model was trained on ([`FEATURE_COLUMNS`]).
//! - [`FeatureTable`]: an ordered batch of rows; row `i` always corresponds
//!   to input row `i`.
//! - [`SubjectTable`]: a parsed CSV upload. Required columns are checked
//!   up front and every cell is validated; a table with any bad row is
//!   rejected as a whole.
//! - [`write_predictions`]: writes the CSV export, uploaded columns followed by
//!   `BMI`, `BMI_Category` and `Predicted_Calories`.
//!
//! # Example
//! ```
//! use feature_table::{SubjectTable, TableOptions, SAMPLE_CSV};
//!
//! let table = SubjectTable::from_reader(SAMPLE_CSV.as_bytes(), &TableOptions::default()).unwrap();
//! let features = table.feature_table();
//! assert_eq!(features.len(), 3);
//! assert_eq!(features.rows()[0].bmi_category.as_str(), "Normal");
//! ```

mod error;
mod row;
mod sample;
pub mod schema;
mod subjects;
mod table;
mod writer;

pub use error::{RowError, TableError};
pub use row::{FeatureRow, FeatureValue};
pub use sample::{OUTPUT_FILE_NAME, SAMPLE_CSV, SAMPLE_FILE_NAME};
pub use schema::{FEATURE_COLUMNS, INPUT_COLUMNS, OUTPUT_COLUMNS};
pub use subjects::{SubjectTable, TableOptions};
pub use table::FeatureTable;
pub use writer::{write_predictions, OutputRow};
