//! Experiment bundle.

use crate::config::{ConfigRecord, DataConfig, ModelConfig, TrainingConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The three records that make up one experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Model architecture.
    pub model: ModelConfig,
    /// Training hyperparameters.
    pub training: TrainingConfig,
    /// Dataset settings.
    pub data: DataConfig,
}

impl ExperimentConfig {
    /// Validate every record.
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        self.training.validate()?;
        self.data.validate()
    }
}
