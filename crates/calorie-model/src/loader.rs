// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Loading model artifacts from disk into a [`TrainedModel`].

use crate::{
    Estimator, FeatureEncoder, ModelError, ModelManifest, Regressor, TargetTransform,
};
use feature_table::FeatureTable;
use std::path::Path;

/// A validated model ready for inference.
///
/// Immutable after construction; evaluating it never mutates state, so
/// a single instance can serve every request concurrently.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    name: String,
    description: Option<String>,
    target_transform: TargetTransform,
    encoder: FeatureEncoder,
    estimator: Estimator,
}

impl TrainedModel {
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Model '{}': {}, {} encoded columns, target transform '{}'",
            self.name,
            self.estimator.describe(),
            self.encoder.width(),
            self.target_transform,
        )
    }
}

impl Regressor for TrainedModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn target_transform(&self) -> TargetTransform {
        self.target_transform
    }

    fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, ModelError> {
        let x = self.encoder.encode(table)?;
        tracing::debug!("encoded design matrix {:?}", x.dim());
        let scores = self.estimator.predict(x.view())?;
        Ok(scores.to_vec())
    }
}

/// Loads model artifacts.
///
/// # Example
/// ```no_run
/// use calorie_model::ModelLoader;
/// use std::path::Path;
///
/// let model = ModelLoader::load(Path::new("./models/calorie_predictor.json")).unwrap();
/// println!("{}", model.summary());
/// ```
pub struct ModelLoader;

impl ModelLoader {
    /// Reads, parses and validates an artifact file.
    pub fn load(path: &Path) -> Result<TrainedModel, ModelError> {
        let manifest = ModelManifest::from_file(path)?;
        let model = Self::from_manifest(manifest)?;
        tracing::info!("loaded {} from '{}'", model.summary(), path.display());
        Ok(model)
    }

    /// Parses and validates an artifact held in memory.
    pub fn from_json(json: &str) -> Result<TrainedModel, ModelError> {
        Self::from_manifest(ModelManifest::from_json(json)?)
    }

    /// Validates a manifest and builds the model.
    pub fn from_manifest(manifest: ModelManifest) -> Result<TrainedModel, ModelError> {
        manifest.validate()?;

        let encoder = FeatureEncoder::new(manifest.encoders);
        let estimator = Estimator::from_spec(manifest.estimator, encoder.width());

        Ok(TrainedModel {
            name: manifest.name,
            description: manifest.description,
            target_transform: manifest.target_transform,
            encoder,
            estimator,
        })
    }
}
