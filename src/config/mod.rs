//! Configuration records, YAML persistence and validation.

mod experiment;
mod file;
mod manager;
mod record;
mod types;
mod validate;

pub use experiment::ExperimentConfig;
pub use file::{load_mapping, load_record, save_mapping, save_record};
pub use manager::ConfigManager;
pub use record::{ConfigKind, ConfigRecord};
pub use serde_yaml::Mapping;
pub use types::{
    DataConfig, EncoderBackbone, ModelConfig, OptimizerKind, SchedulerKind, TrainingConfig,
};
pub use validate::{validate_data_config, validate_model_config, validate_training_config};
