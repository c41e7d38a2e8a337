// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CSV export of batch predictions.

use crate::schema::OUTPUT_COLUMNS;
use crate::{SubjectTable, TableError};
use body_metrics::BmiCategory;
use std::io::Write;

/// Derived values appended to one uploaded row.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct OutputRow {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub predicted_calories: f64,
}

/// Writes `table` with [`OUTPUT_COLUMNS`] filled in, one output row per
/// input row, as UTF-8 CSV.
///
/// Uploaded cells are echoed as received, except that an uploaded output
/// column is overwritten in place. Output columns the upload lacks are
/// appended. Derived numbers are written at full precision.
pub fn write_predictions<W: Write>(
    writer: W,
    table: &SubjectTable,
    outputs: &[OutputRow],
    delimiter: u8,
) -> Result<(), TableError> {
    if outputs.len() != table.len() {
        return Err(TableError::LengthMismatch {
            expected: table.len(),
            actual: outputs.len(),
        });
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let existing = OUTPUT_COLUMNS.map(|column| table.headers().iter().position(|h| h == column));

    let mut header = table.headers().clone();
    for (column, position) in OUTPUT_COLUMNS.iter().zip(existing) {
        if position.is_none() {
            header.push_field(column);
        }
    }
    csv_writer.write_record(&header)?;

    for (record, out) in table.records().iter().zip(outputs) {
        let derived = [
            out.bmi.to_string(),
            out.bmi_category.as_str().to_string(),
            out.predicted_calories.to_string(),
        ];
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        for (value, position) in derived.into_iter().zip(existing) {
            match position.and_then(|i| row.get_mut(i)) {
                Some(cell) => *cell = value,
                None => row.push(value),
            }
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TableOptions, SAMPLE_CSV};

    fn outputs_for(table: &SubjectTable) -> Vec<OutputRow> {
        table
            .feature_table()
            .iter()
            .enumerate()
            .map(|(i, r)| OutputRow {
                bmi: r.bmi,
                bmi_category: r.bmi_category,
                predicted_calories: 100.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn test_appends_output_columns() {
        let table = SubjectTable::from_reader(SAMPLE_CSV.as_bytes(), &TableOptions::default()).unwrap();
        let mut buf = Vec::new();
        write_predictions(&mut buf, &table, &outputs_for(&table), b',').unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp,BMI,BMI_Category,Predicted_Calories"
        );
        assert!(lines[1].starts_with("Male,25,175,70,45,120,38,22.857142857142"));
        assert!(lines[1].ends_with(",Normal,100"));
        assert!(lines[3].ends_with(",102"));
    }

    #[test]
    fn test_length_mismatch() {
        let table = SubjectTable::from_reader(SAMPLE_CSV.as_bytes(), &TableOptions::default()).unwrap();
        let mut outputs = outputs_for(&table);
        outputs.pop();
        let err = write_predictions(Vec::new(), &table, &outputs, b',').unwrap_err();
        assert!(matches!(
            err,
            TableError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_stale_output_column_is_overwritten() {
        let csv = "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp,BMI\n\
                   Male,25,175,70,45,120,38,99.9\n";
        let table = SubjectTable::from_reader(csv.as_bytes(), &TableOptions::default()).unwrap();
        let mut buf = Vec::new();
        write_predictions(&mut buf, &table, &outputs_for(&table), b',').unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp,BMI,BMI_Category,Predicted_Calories"
        );
        assert!(!lines[1].contains("99.9"));
        assert!(lines[1].starts_with("Male,25,175,70,45,120,38,22.857142857142"));
        assert!(lines[1].ends_with(",Normal,100"));
    }

    #[test]
    fn test_rescored_export_keeps_ten_columns() {
        let table = SubjectTable::from_reader(SAMPLE_CSV.as_bytes(), &TableOptions::default()).unwrap();
        let mut first = Vec::new();
        write_predictions(&mut first, &table, &outputs_for(&table), b',').unwrap();

        let again = SubjectTable::from_reader(first.as_slice(), &TableOptions::default()).unwrap();
        let mut second = Vec::new();
        write_predictions(&mut second, &again, &outputs_for(&again), b',').unwrap();

        assert_eq!(first, second);
        let text = String::from_utf8(second).unwrap();
        assert_eq!(text.lines().next().unwrap().split(',').count(), 10);
    }

    #[test]
    fn test_output_reparses_with_extra_columns() {
        let table = SubjectTable::from_reader(SAMPLE_CSV.as_bytes(), &TableOptions::default()).unwrap();
        let mut buf = Vec::new();
        write_predictions(&mut buf, &table, &outputs_for(&table), b',').unwrap();

        // The export is itself a valid upload: extra columns are tolerated.
        let again = SubjectTable::from_reader(buf.as_slice(), &TableOptions::default()).unwrap();
        assert_eq!(again.len(), 3);
        assert_eq!(again.headers().len(), 10);
    }
}
