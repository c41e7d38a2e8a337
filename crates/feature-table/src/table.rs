// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Ordered batches of feature rows.

use crate::{FeatureRow, FeatureValue};
use body_metrics::SubjectRecord;

/// An ordered batch of [`FeatureRow`]s.
///
/// Built element-wise from subjects: no filtering, no reordering, so
/// `rows()[i]` is always derived from input subject `i`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Derives one feature row per subject.
    pub fn from_subjects(subjects: &[SubjectRecord]) -> Self {
        Self {
            rows: subjects.iter().map(FeatureRow::from_subject).collect(),
        }
    }

    /// Wraps already-built rows.
    pub fn from_rows(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    /// A one-row table.
    pub fn single(row: FeatureRow) -> Self {
        Self { rows: vec![row] }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRow> {
        self.rows.iter()
    }

    /// All values of one column, top to bottom. `None` for unknown columns.
    pub fn column(&self, name: &str) -> Option<Vec<FeatureValue>> {
        let idx = crate::schema::feature_index(name)?;
        Some(self.rows.iter().map(|r| r.values()[idx]).collect())
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a FeatureRow;
    type IntoIter = std::slice::Iter<'a, FeatureRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
