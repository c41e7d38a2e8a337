// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for table parsing and export.

use body_metrics::MetricsError;
use std::fmt;

/// Number of row errors spelled out in a [`TableError::InvalidRows`] message.
const MAX_LISTED_ROWS: usize = 5;

/// A validation failure tied to one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub error: MetricsError,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}

/// Errors that can occur while reading an uploaded table or writing results.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The header lacks one or more required columns.
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// One or more data rows failed parsing or domain validation.
    #[error("{} invalid value(s): {}", .0.len(), list_rows(.0))]
    InvalidRows(Vec<RowError>),

    /// The table has a header but no data rows.
    #[error("table contains no data rows")]
    Empty,

    /// The CSV itself is malformed (ragged rows, bad UTF-8, ...).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or writing the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Derived output columns do not line up with the input rows.
    #[error("expected {expected} output rows, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

fn list_rows(rows: &[RowError]) -> String {
    let mut listed: Vec<String> = rows
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(|r| r.to_string())
        .collect();
    if rows.len() > MAX_LISTED_ROWS {
        listed.push(format!("and {} more", rows.len() - MAX_LISTED_ROWS));
    }
    listed.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let e = TableError::MissingColumns(vec!["Heart_Rate".into(), "Body_Temp".into()]);
        assert_eq!(
            e.to_string(),
            "missing required column(s): Heart_Rate, Body_Temp"
        );
    }

    #[test]
    fn test_invalid_rows_message_truncates() {
        let rows: Vec<RowError> = (1..=8)
            .map(|row| RowError {
                row,
                error: MetricsError::InvalidGender("x".into()),
            })
            .collect();
        let msg = TableError::InvalidRows(rows).to_string();
        assert!(msg.starts_with("8 invalid value(s): row 1:"));
        assert!(msg.ends_with("and 3 more"));
    }
}
