// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Regression trees stored as flat node arrays.
//!
//! Node `0` is the root. A split sends a row left when
//! `x[feature] <= threshold` and right otherwise. Children always have a
//! larger index than their parent, so traversal terminates in at most
//! `nodes.len()` steps.
//!
//! ```json
//! { "nodes": [
//!     { "feature": 4, "threshold": 0.5, "left": 1, "right": 2 },
//!     { "value": 7.25 },
//!     { "value": 11.0 }
//! ] }
//! ```

use crate::ModelError;

/// One node of a regression tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl Node {
    pub fn split(feature: usize, threshold: f64, left: usize, right: usize) -> Self {
        Self::Split {
            feature,
            threshold,
            left,
            right,
        }
    }

    pub fn leaf(value: f64) -> Self {
        Self::Leaf { value }
    }
}

/// A single regression tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Checks structure against an encoded row width.
    pub fn validate(&self, width: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidEstimator("tree has no nodes".into()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= width {
                        return Err(ModelError::InvalidEstimator(format!(
                            "node {i} splits on column {feature}, but rows have {width} columns"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(ModelError::InvalidEstimator(format!(
                            "node {i} has a NaN threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(ModelError::InvalidEstimator(format!(
                                "node {i} has child {child}; children must follow their parent \
                                 and lie within {} nodes",
                                self.nodes.len()
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(ModelError::InvalidEstimator(format!(
                            "leaf {i} has non-finite value {value}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Evaluates the tree on one encoded row. Assumes [`validate`](Self::validate) passed.
    pub fn evaluate(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    /// Number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }
}
