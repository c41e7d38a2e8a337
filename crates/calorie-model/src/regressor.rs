// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The model capability seen by the rest of the system.

use crate::{ModelError, TargetTransform};
use feature_table::FeatureTable;

/// Anything that maps feature rows to raw regression scores.
///
/// Implementations must be pure with respect to `&self`: one loaded
/// instance is shared read-only across every request.
pub trait Regressor: Send + Sync {
    /// Human-readable model name.
    fn name(&self) -> &str;

    /// The transform applied to the label at training time.
    fn target_transform(&self) -> TargetTransform {
        TargetTransform::Sqrt
    }

    /// Predicts one raw score per row, in row order, on the training scale.
    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, ModelError>;
}
