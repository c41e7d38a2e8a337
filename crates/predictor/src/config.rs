// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Predictor configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! model_path = "./models/calorie_predictor.json"
//! strict_bounds = true
//! delimiter = ","
//! ```

use crate::PredictorError;
use feature_table::TableOptions;
use std::path::{Path, PathBuf};

/// Configuration for the calorie predictor.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictorConfig {
    /// Path to the model artifact (JSON).
    pub model_path: PathBuf,
    /// Reject inputs outside their documented domain. When `false`,
    /// out-of-range values are logged and predicted anyway.
    #[serde(default = "default_true")]
    pub strict_bounds: bool,
    /// CSV field delimiter for batch input and output.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_true() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

impl PredictorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PredictorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PredictorError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PredictorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| PredictorError::ConfigError(format!("TOML parse error: {e}")))?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, PredictorError> {
        toml::to_string_pretty(self)
            .map_err(|e| PredictorError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// The delimiter as a single byte. Only ASCII delimiters are supported.
    pub fn delimiter_byte(&self) -> Result<u8, PredictorError> {
        if self.delimiter.is_ascii() && self.delimiter != '"' && self.delimiter != '\n' {
            Ok(self.delimiter as u8)
        } else {
            Err(PredictorError::ConfigError(format!(
                "unsupported CSV delimiter {:?}",
                self.delimiter
            )))
        }
    }

    /// Table parsing options derived from this config.
    pub fn table_options(&self) -> Result<TableOptions, PredictorError> {
        Ok(TableOptions {
            delimiter: self.delimiter_byte()?,
            strict_bounds: self.strict_bounds,
        })
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./models/calorie_predictor.json"),
            strict_bounds: true,
            delimiter: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = PredictorConfig::default();
        assert_eq!(c.model_path, PathBuf::from("./models/calorie_predictor.json"));
        assert!(c.strict_bounds);
        assert_eq!(c.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
model_path = "/srv/models/gbr.json"
strict_bounds = false
delimiter = ";"
"#;
        let c = PredictorConfig::from_toml(toml).unwrap();
        assert_eq!(c.model_path, PathBuf::from("/srv/models/gbr.json"));
        assert!(!c.strict_bounds);
        assert_eq!(c.table_options().unwrap().delimiter, b';');
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let c = PredictorConfig::from_toml("model_path = \"m.json\"").unwrap();
        assert!(c.strict_bounds);
        assert_eq!(c.delimiter, ',');
    }

    #[test]
    fn test_missing_model_path_is_error() {
        assert!(PredictorConfig::from_toml("strict_bounds = true").is_err());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = PredictorConfig::from_toml("model_path = \"m.json\"\ndelimiter = \"→\"");
        assert!(matches!(err, Err(PredictorError::ConfigError(_))));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = PredictorConfig {
            delimiter: '\t',
            ..Default::default()
        };
        let back = PredictorConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calorie.toml");
        std::fs::write(&path, "model_path = \"x.json\"\n").unwrap();
        let c = PredictorConfig::from_file(&path).unwrap();
        assert_eq!(c.model_path, PathBuf::from("x.json"));
        assert!(PredictorConfig::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
