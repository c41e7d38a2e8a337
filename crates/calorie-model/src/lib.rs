// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # calorie-model
//!
//! The trained calorie model, treated as an opaque collaborator behind the
//! [`Regressor`] capability: give it a [`FeatureTable`](feature_table::FeatureTable),
//! get back one raw score per row on the model's training scale.
//!
//! Models are stored as a single JSON artifact ([`ModelManifest`]) that
//! captures everything an exported regression pipeline needs:
//!
//! - the feature column contract (must match the feature row order exactly),
//! - one encoder per column (standard scaling, one-hot, ordinal),
//! - the estimator (linear, or a tree ensemble for boosted/bagged models),
//! - the target transform applied at training time.
//!
//! [`ModelLoader`] parses and validates an artifact into a [`TrainedModel`].
//! A loaded model is immutable and `Send + Sync`; share it behind an `Arc`.
//!
//! # Example
//! ```no_run
//! use calorie_model::{ModelLoader, Regressor};
//! use std::path::Path;
//!
//! let model = ModelLoader::load(Path::new("./models/calorie_predictor.json")).unwrap();
//! println!("{}", model.summary());
//! ```

mod encoder;
mod error;
mod estimator;
mod loader;
pub mod manifest;
mod regressor;
mod transform;
pub mod tree;

pub use encoder::FeatureEncoder;
pub use error::ModelError;
pub use estimator::Estimator;
pub use loader::{ModelLoader, TrainedModel};
pub use manifest::{Aggregation, EncoderSpec, EstimatorSpec, ModelManifest};
pub use regressor::Regressor;
pub use transform::TargetTransform;
pub use tree::{Node, Tree};
