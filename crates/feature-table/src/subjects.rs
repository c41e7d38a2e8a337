// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing uploaded subject tables.
//!
//! The header must name every column in [`INPUT_COLUMNS`]; order is free
//! and extra columns are carried through untouched so they can be echoed
//! on export. Missing columns are reported all at once. Cell-level
//! problems are collected across the whole table and reported together;
//! a table with any invalid cell is rejected and never partially predicted.

use crate::schema::{self, INPUT_COLUMNS};
use crate::{FeatureTable, RowError, TableError};
use body_metrics::{FieldBounds, Gender, MetricsError, SubjectRecord};
use std::io::Read;
use std::path::Path;

/// Options controlling how an upload is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Reject out-of-domain values. When `false` they are only logged.
    /// Unparseable, non-finite and unrepresentable values (a negative or
    /// overflowing whole number) are always rejected.
    pub strict_bounds: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            strict_bounds: true,
        }
    }
}

/// Positions of the required columns within the uploaded header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    gender: usize,
    age: usize,
    height: usize,
    weight: usize,
    duration: usize,
    heart_rate: usize,
    body_temp: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, TableError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = INPUT_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing));
        }

        // All present, checked above.
        let at = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            gender: at(schema::GENDER),
            age: at(schema::AGE),
            height: at(schema::HEIGHT),
            weight: at(schema::WEIGHT),
            duration: at(schema::DURATION),
            heart_rate: at(schema::HEART_RATE),
            body_temp: at(schema::BODY_TEMP),
        })
    }
}

/// A validated upload: the raw records as received plus one parsed
/// [`SubjectRecord`] per data row.
#[derive(Debug, Clone)]
pub struct SubjectTable {
    headers: csv::StringRecord,
    records: Vec<csv::StringRecord>,
    subjects: Vec<SubjectRecord>,
}

impl SubjectTable {
    /// Reads and validates a CSV upload from any reader.
    pub fn from_reader<R: Read>(reader: R, options: &TableOptions) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut records = Vec::new();
        let mut subjects = Vec::new();
        let mut errors = Vec::new();

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let row = i + 1;
            match parse_subject(&record, &columns, options.strict_bounds) {
                Ok(subject) => subjects.push(subject),
                Err(row_errors) => {
                    errors.extend(row_errors.into_iter().map(|error| RowError { row, error }))
                }
            }
            records.push(record);
        }

        if !errors.is_empty() {
            return Err(TableError::InvalidRows(errors));
        }
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        tracing::debug!(
            "parsed {} subject rows ({} columns)",
            records.len(),
            headers.len()
        );

        Ok(Self {
            headers,
            records,
            subjects,
        })
    }

    /// Reads and validates a CSV file.
    pub fn from_path(path: &Path, options: &TableOptions) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file), options)
    }

    /// Builds a table from subjects already in memory, using the canonical
    /// [`INPUT_COLUMNS`] header.
    pub fn from_subjects(subjects: Vec<SubjectRecord>) -> Self {
        let headers = csv::StringRecord::from(INPUT_COLUMNS.to_vec());
        let records = subjects
            .iter()
            .map(|s| {
                csv::StringRecord::from(vec![
                    s.gender.to_string(),
                    s.age.to_string(),
                    s.height_cm.to_string(),
                    s.weight_kg.to_string(),
                    s.duration_min.to_string(),
                    s.heart_rate_bpm.to_string(),
                    s.body_temp_c.to_string(),
                ])
            })
            .collect();
        Self {
            headers,
            records,
            subjects,
        }
    }

    /// Header as uploaded.
    pub fn headers(&self) -> &csv::StringRecord {
        &self.headers
    }

    /// Data rows as uploaded (after whitespace trimming).
    pub fn records(&self) -> &[csv::StringRecord] {
        &self.records
    }

    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Applies the BMI calculator and categorizer to every row.
    pub fn feature_table(&self) -> FeatureTable {
        FeatureTable::from_subjects(&self.subjects)
    }
}

// ── Cell parsing ───────────────────────────────────────────────

fn parse_subject(
    record: &csv::StringRecord,
    cols: &ColumnIndex,
    strict_bounds: bool,
) -> Result<SubjectRecord, Vec<MetricsError>> {
    let mut errors = Vec::new();
    let cell = |idx: usize| record.get(idx).unwrap_or("");

    let gender = cell(cols.gender)
        .parse::<Gender>()
        .map_err(|e| errors.push(e))
        .ok();
    let age = collect(parse_whole(cell(cols.age), &FieldBounds::AGE), &mut errors);
    let height_cm = collect(parse_real(cell(cols.height), &FieldBounds::HEIGHT), &mut errors);
    let weight_kg = collect(parse_real(cell(cols.weight), &FieldBounds::WEIGHT), &mut errors);
    let duration_min = collect(
        parse_whole(cell(cols.duration), &FieldBounds::DURATION),
        &mut errors,
    );
    let heart_rate_bpm = collect(
        parse_whole(cell(cols.heart_rate), &FieldBounds::HEART_RATE),
        &mut errors,
    );
    let body_temp_c = collect(
        parse_real(cell(cols.body_temp), &FieldBounds::BODY_TEMP),
        &mut errors,
    );

    let (
        Some(gender),
        Some(age),
        Some(height_cm),
        Some(weight_kg),
        Some(duration_min),
        Some(heart_rate_bpm),
        Some(body_temp_c),
    ) = (
        gender,
        age,
        height_cm,
        weight_kg,
        duration_min,
        heart_rate_bpm,
        body_temp_c,
    )
    else {
        return Err(errors);
    };

    let subject = SubjectRecord {
        gender,
        age,
        height_cm,
        weight_kg,
        duration_min,
        heart_rate_bpm,
        body_temp_c,
    };

    for violation in subject.violations() {
        match violation {
            MetricsError::OutOfRange { .. } if !strict_bounds => {
                tracing::warn!("accepting out-of-range value: {violation}");
            }
            other => errors.push(other),
        }
    }

    if errors.is_empty() {
        Ok(subject)
    } else {
        Err(errors)
    }
}

fn collect<T>(result: Result<T, MetricsError>, errors: &mut Vec<MetricsError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn parse_real(cell: &str, bounds: &FieldBounds) -> Result<f64, MetricsError> {
    cell.parse::<f64>().map_err(|_| MetricsError::NotANumber {
        field: bounds.field,
        value: cell.to_string(),
    })
}

/// Parses a whole number, accepting integral real spellings such as `45.0`.
fn parse_whole(cell: &str, bounds: &FieldBounds) -> Result<u32, MetricsError> {
    if let Ok(v) = cell.parse::<u32>() {
        return Ok(v);
    }
    let v = parse_real(cell, bounds)?;
    if !v.is_finite() {
        return Err(MetricsError::NotFinite {
            field: bounds.field,
        });
    }
    if v.fract() != 0.0 {
        return Err(MetricsError::NotIntegral {
            field: bounds.field,
            value: cell.to_string(),
        });
    }
    if v < 0.0 || v > u32::MAX as f64 {
        return Err(MetricsError::Unrepresentable {
            field: bounds.field,
            value: cell.to_string(),
        });
    }
    Ok(v as u32)
}
