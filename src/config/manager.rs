//! Configuration manager.

use crate::config::file::{load_mapping, load_record, save_mapping, save_record};
use crate::config::{ConfigKind, ConfigRecord, ExperimentConfig};
use crate::error::{Error, Result};
use serde_yaml::Mapping;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads and saves configuration files.
///
/// The manager holds nothing but an optional default path; every
/// operation opens, reads or writes, and closes its file independently.
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create a manager without a default path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose [`load_default`](Self::load_default) reads `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// The default path, if one was set.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load a YAML file as an unchecked mapping.
    pub fn load(&self, path: &Path) -> Result<Mapping> {
        load_mapping(path)
    }

    /// Load the manager's default path as an unchecked mapping.
    pub fn load_default(&self) -> Result<Mapping> {
        let path = self.config_path.as_deref().ok_or(Error::NoConfigPath)?;
        load_mapping(path)
    }

    /// Write a mapping to a YAML file, replacing any existing file.
    pub fn save(&self, mapping: &Mapping, path: &Path) -> Result<()> {
        save_mapping(mapping, path)
    }

    /// Load a record and check it against its schema.
    pub fn load_record<R: ConfigRecord>(&self, path: &Path) -> Result<R> {
        load_record(path)
    }

    /// Write a record to a YAML file.
    pub fn save_record<R: ConfigRecord>(&self, record: &R, path: &Path) -> Result<()> {
        save_record(record, path)
    }

    /// Write the default model, training and data configs into `dir`.
    ///
    /// Creates `dir` if needed and overwrites existing files. Returns the
    /// written paths in model, training, data order.
    pub fn create_default_configs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        create_dir(dir)?;

        let mut written = Vec::with_capacity(ConfigKind::ALL.len());
        for kind in ConfigKind::ALL {
            let path = dir.join(kind.file_name());
            save_mapping(&kind.default_mapping()?, &path)?;
            info!("Created: {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Load all three records from an experiment directory.
    pub fn load_experiment(&self, dir: &Path) -> Result<ExperimentConfig> {
        let experiment = ExperimentConfig {
            model: load_record(&dir.join(ConfigKind::Model.file_name()))?,
            training: load_record(&dir.join(ConfigKind::Training.file_name()))?,
            data: load_record(&dir.join(ConfigKind::Data.file_name()))?,
        };
        info!("Loaded experiment from {}", dir.display());
        Ok(experiment)
    }

    /// Save all three records into an experiment directory.
    pub fn save_experiment(&self, experiment: &ExperimentConfig, dir: &Path) -> Result<()> {
        create_dir(dir)?;
        save_record(&experiment.model, &dir.join(ConfigKind::Model.file_name()))?;
        save_record(&experiment.training, &dir.join(ConfigKind::Training.file_name()))?;
        save_record(&experiment.data, &dir.join(ConfigKind::Data.file_name()))?;
        info!("Saved experiment to {}", dir.display());
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::ConfigDirCreate {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{DataConfig, ModelConfig, TrainingConfig};
    use tempfile::TempDir;

    #[test]
    fn test_create_default_configs_writes_three_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("experiments");
        let manager = ConfigManager::new();

        let written = manager.create_default_configs(&target).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["model_config.yaml", "training_config.yaml", "data_config.yaml"]
        );
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 3);

        for kind in ConfigKind::ALL {
            let loaded = manager.load(&target.join(kind.file_name())).unwrap();
            assert_eq!(loaded, kind.default_mapping().unwrap());
        }
    }

    #[test]
    fn test_create_default_configs_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new();

        manager.create_default_configs(dir.path()).unwrap();
        let first = manager
            .load(&dir.path().join("training_config.yaml"))
            .unwrap();
        manager.create_default_configs(dir.path()).unwrap();
        let second = manager
            .load(&dir.path().join("training_config.yaml"))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_create_default_configs_overwrites_edits() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new();
        let path = dir.path().join("model_config.yaml");
        std::fs::write(&path, "input_size: 1024\n").unwrap();

        manager.create_default_configs(dir.path()).unwrap();
        let config: ModelConfig = manager.load_record(&path).unwrap();
        assert_eq!(config.input_size, 256);
    }

    #[test]
    fn test_load_default_without_path() {
        let manager = ConfigManager::new();
        assert!(manager.config_path().is_none());
        assert!(matches!(manager.load_default(), Err(Error::NoConfigPath)));
    }

    #[test]
    fn test_load_default_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data_config.yaml");
        let manager = ConfigManager::with_path(&path);

        manager
            .save(&DataConfig::default().to_mapping().unwrap(), &path)
            .unwrap();
        let mapping = manager.load_default().unwrap();
        assert_eq!(mapping, DataConfig::default().to_mapping().unwrap());
    }

    #[test]
    fn test_experiment_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new();
        let experiment = ExperimentConfig {
            model: ModelConfig {
                num_layers: 6,
                ..ModelConfig::default()
            },
            training: TrainingConfig {
                num_epochs: 50,
                device: "cpu".to_string(),
                ..TrainingConfig::default()
            },
            data: DataConfig::default(),
        };

        manager.save_experiment(&experiment, dir.path()).unwrap();
        let loaded = manager.load_experiment(dir.path()).unwrap();
        assert_eq!(loaded, experiment);
    }

    #[test]
    fn test_load_experiment_missing_file() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new();
        manager
            .save_record(&ModelConfig::default(), &dir.path().join("model_config.yaml"))
            .unwrap();

        let result = manager.load_experiment(dir.path());
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }
}
