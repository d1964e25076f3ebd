//! Record trait and record kinds.

use crate::config::validate::{validate_data_config, validate_model_config, validate_training_config};
use crate::config::{DataConfig, ModelConfig, TrainingConfig};
use crate::constants::CONFIG_FILE_SUFFIX;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// A named configuration record with defaults and validation.
pub trait ConfigRecord: Serialize + DeserializeOwned + Default {
    /// Record kind.
    const KIND: ConfigKind;

    /// Check field values beyond what the type system enforces.
    fn validate(&self) -> Result<()>;

    /// Convert the record into a key-to-value mapping.
    fn to_mapping(&self) -> Result<Mapping> {
        match serde_yaml::to_value(self).map_err(|e| Error::ConfigSerialize { source: e })? {
            Value::Mapping(mapping) => Ok(mapping),
            // Records are structs, so this only happens if a record
            // is ever given a custom non-map serializer.
            other => Err(Error::validation(format!(
                "{} config serialized to a non-mapping value: {other:?}",
                Self::KIND
            ))),
        }
    }

    /// Build a validated record from a mapping.
    ///
    /// Missing keys take their default value. Unknown keys and wrongly
    /// typed values are rejected.
    fn from_mapping(mapping: Mapping) -> Result<Self> {
        let record: Self =
            serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| Error::ConfigSchema {
                name: Self::KIND.name(),
                source: e,
            })?;
        record.validate()?;
        Ok(record)
    }
}

impl ConfigRecord for ModelConfig {
    const KIND: ConfigKind = ConfigKind::Model;

    fn validate(&self) -> Result<()> {
        validate_model_config(self)
    }
}

impl ConfigRecord for TrainingConfig {
    const KIND: ConfigKind = ConfigKind::Training;

    fn validate(&self) -> Result<()> {
        validate_training_config(self)
    }
}

impl ConfigRecord for DataConfig {
    const KIND: ConfigKind = ConfigKind::Data;

    fn validate(&self) -> Result<()> {
        validate_data_config(self)
    }
}

/// The three configuration record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ConfigKind {
    /// [`ModelConfig`].
    Model,
    /// [`TrainingConfig`].
    Training,
    /// [`DataConfig`].
    Data,
}

impl ConfigKind {
    /// All kinds in the order defaults are written.
    pub const ALL: [Self; 3] = [Self::Model, Self::Training, Self::Data];

    /// Record name used in file names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Training => "training",
            Self::Data => "data",
        }
    }

    /// Conventional file name, e.g. `model_config.yaml`.
    pub fn file_name(self) -> String {
        format!("{}{CONFIG_FILE_SUFFIX}", self.name())
    }

    /// Infer the kind from a conventional file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        file_name
            .strip_suffix(CONFIG_FILE_SUFFIX)
            .ok_or_else(|| Error::UnknownConfigKind {
                value: file_name.clone(),
            })?
            .parse()
    }

    /// Default record of this kind as a mapping.
    pub fn default_mapping(self) -> Result<Mapping> {
        match self {
            Self::Model => ModelConfig::default().to_mapping(),
            Self::Training => TrainingConfig::default().to_mapping(),
            Self::Data => DataConfig::default().to_mapping(),
        }
    }

    /// Check that a mapping is a valid record of this kind.
    pub fn check_mapping(self, mapping: Mapping) -> Result<()> {
        match self {
            Self::Model => ModelConfig::from_mapping(mapping).map(drop),
            Self::Training => TrainingConfig::from_mapping(mapping).map(drop),
            Self::Data => DataConfig::from_mapping(mapping).map(drop),
        }
    }
}

impl std::fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ConfigKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "model" => Ok(Self::Model),
            "training" => Ok(Self::Training),
            "data" => Ok(Self::Data),
            other => Err(Error::UnknownConfigKind {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn key(name: &str) -> Value {
        Value::String(name.to_string())
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ConfigKind::Model.file_name(), "model_config.yaml");
        assert_eq!(ConfigKind::Training.file_name(), "training_config.yaml");
        assert_eq!(ConfigKind::Data.file_name(), "data_config.yaml");
    }

    #[test]
    fn test_kind_from_path() {
        let kind = ConfigKind::from_path(Path::new("runs/exp1/training_config.yaml"));
        assert_eq!(kind.ok(), Some(ConfigKind::Training));

        let result = ConfigKind::from_path(Path::new("settings.yaml"));
        assert!(matches!(result, Err(Error::UnknownConfigKind { .. })));

        let result = ConfigKind::from_path(Path::new("optim_config.yaml"));
        assert!(matches!(result, Err(Error::UnknownConfigKind { .. })));
    }

    #[test]
    fn test_model_mapping_keeps_types() {
        let mapping = ModelConfig::default().to_mapping().unwrap();
        assert_eq!(mapping.len(), 13);
        assert_eq!(mapping.get(key("input_size")), Some(&Value::from(256)));
        assert_eq!(mapping.get(key("embed_dim")), Some(&Value::from(768)));
        assert_eq!(
            mapping.get(key("encoder_backbone")),
            Some(&Value::from("resnet50"))
        );
        assert_eq!(mapping.get(key("dropout")), Some(&Value::from(0.1)));
        assert_eq!(mapping.get(key("encoder_pretrained")), Some(&Value::from(true)));
    }

    #[test]
    fn test_data_mapping_encodes_tuples_as_sequences() {
        let mapping = DataConfig::default().to_mapping().unwrap();
        let copies = mapping.get(key("num_copies_range")).unwrap();
        assert_eq!(copies, &Value::Sequence(vec![Value::from(1), Value::from(3)]));
        let area = mapping.get(key("copy_area_range")).unwrap();
        assert_eq!(area, &Value::Sequence(vec![Value::from(0.05), Value::from(0.2)]));
    }

    #[test]
    fn test_from_mapping_fills_defaults() {
        let mut mapping = Mapping::new();
        mapping.insert(key("batch_size"), Value::from(32));
        mapping.insert(key("optimizer"), Value::from("sgd"));

        let config = TrainingConfig::from_mapping(mapping).unwrap();
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.optimizer, crate::config::OptimizerKind::Sgd);
        assert_eq!(config.learning_rate, 1e-4);
    }

    #[test]
    fn test_from_mapping_rejects_unknown_key() {
        let mut mapping = Mapping::new();
        mapping.insert(key("embed_dimension"), Value::from(512));

        let result = ModelConfig::from_mapping(mapping);
        assert!(matches!(result, Err(Error::ConfigSchema { name: "model", .. })));
    }

    #[test]
    fn test_from_mapping_rejects_wrong_type() {
        let mut mapping = Mapping::new();
        mapping.insert(key("input_size"), Value::from("large"));

        let result = ModelConfig::from_mapping(mapping);
        assert!(matches!(result, Err(Error::ConfigSchema { .. })));
    }

    #[test]
    fn test_from_mapping_runs_validation() {
        let mut mapping = Mapping::new();
        mapping.insert(
            key("copy_area_range"),
            Value::Sequence(vec![Value::from(0.5), Value::from(0.1)]),
        );

        let result = DataConfig::from_mapping(mapping);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_default_mapping_checks_clean() {
        for kind in ConfigKind::ALL {
            let mapping = kind.default_mapping().unwrap();
            assert!(kind.check_mapping(mapping).is_ok(), "{kind} defaults invalid");
        }
    }
}
