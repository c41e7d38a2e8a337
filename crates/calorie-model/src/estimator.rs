// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fitted estimators evaluated over a whole design matrix at once.

use crate::{Aggregation, EstimatorSpec, ModelError, Tree};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// A validated, ready-to-evaluate estimator.
#[derive(Debug, Clone)]
pub enum Estimator {
    Linear {
        intercept: f64,
        coefficients: Array1<f64>,
    },
    TreeEnsemble {
        aggregation: Aggregation,
        init: f64,
        learning_rate: f64,
        trees: Vec<Tree>,
        width: usize,
    },
}

impl Estimator {
    /// Builds an estimator from a spec already validated against `width`.
    pub fn from_spec(spec: EstimatorSpec, width: usize) -> Self {
        match spec {
            EstimatorSpec::Linear {
                intercept,
                coefficients,
            } => Self::Linear {
                intercept,
                coefficients: Array1::from(coefficients),
            },
            EstimatorSpec::TreeEnsemble {
                aggregation,
                init,
                learning_rate,
                trees,
            } => Self::TreeEnsemble {
                aggregation,
                init,
                learning_rate,
                trees,
                width,
            },
        }
    }

    /// Number of input columns.
    pub fn width(&self) -> usize {
        match self {
            Self::Linear { coefficients, .. } => coefficients.len(),
            Self::TreeEnsemble { width, .. } => *width,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::TreeEnsemble { .. } => "tree_ensemble",
        }
    }

    /// One-line description for logs and `inspect`.
    pub fn describe(&self) -> String {
        match self {
            Self::Linear { coefficients, .. } => {
                format!("linear ({} coefficients)", coefficients.len())
            }
            Self::TreeEnsemble {
                aggregation, trees, ..
            } => {
                let leaves: usize = trees.iter().map(Tree::num_leaves).sum();
                format!(
                    "tree ensemble ({} trees, {} leaves, {:?} aggregation)",
                    trees.len(),
                    leaves,
                    aggregation
                )
            }
        }
    }

    /// Predicts one raw score per row of `x`.
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, ModelError> {
        if x.ncols() != self.width() {
            return Err(ModelError::WidthMismatch {
                expected: self.width(),
                actual: x.ncols(),
            });
        }

        let scores = match self {
            Self::Linear {
                intercept,
                coefficients,
            } => x.dot(coefficients) + *intercept,
            Self::TreeEnsemble {
                aggregation,
                init,
                learning_rate,
                trees,
                ..
            } => x
                .rows()
                .into_iter()
                .map(|row| {
                    let total = sum_trees(trees, row);
                    match aggregation {
                        Aggregation::Sum => init + learning_rate * total,
                        Aggregation::Mean => total / trees.len() as f64,
                    }
                })
                .collect(),
        };
        Ok(scores)
    }
}

fn sum_trees(trees: &[Tree], row: ArrayView1<'_, f64>) -> f64 {
    match row.as_slice() {
        Some(values) => trees.iter().map(|t| t.evaluate(values)).sum(),
        None => {
            let values = row.to_vec();
            trees.iter().map(|t| t.evaluate(&values)).sum()
        }
    }
}
