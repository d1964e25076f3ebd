//! Configuration validation.

use crate::config::{DataConfig, ModelConfig, TrainingConfig};
use crate::constants::data::MAX_ROTATION;
use crate::error::{Error, Result};
use std::path::Path;

/// Validate a model configuration.
pub fn validate_model_config(config: &ModelConfig) -> Result<()> {
    require_positive("input_size", config.input_size)?;
    require_positive("input_channels", config.input_channels)?;
    require_positive("patch_size", config.patch_size)?;
    require_positive("embed_dim", config.embed_dim)?;
    require_positive("num_heads", config.num_heads)?;
    require_positive("num_layers", config.num_layers)?;
    require_positive("correlation_block_size", config.correlation_block_size)?;
    require_positive("num_classes", config.num_classes)?;

    if !config.input_size.is_multiple_of(config.patch_size) {
        return Err(Error::validation(format!(
            "input_size ({}) must be divisible by patch_size ({})",
            config.input_size, config.patch_size
        )));
    }

    if !config.embed_dim.is_multiple_of(config.num_heads) {
        return Err(Error::validation(format!(
            "embed_dim ({}) must be divisible by num_heads ({})",
            config.embed_dim, config.num_heads
        )));
    }

    require_finite("dropout", config.dropout)?;
    if !(0.0..1.0).contains(&config.dropout) {
        return Err(Error::validation(format!(
            "dropout must be in [0, 1), got {}",
            config.dropout
        )));
    }

    require_finite("similarity_percentile", config.similarity_percentile)?;
    if config.similarity_percentile <= 0.0 || config.similarity_percentile > 1.0 {
        return Err(Error::validation(format!(
            "similarity_percentile must be in (0, 1], got {}",
            config.similarity_percentile
        )));
    }

    Ok(())
}

/// Validate a training configuration.
pub fn validate_training_config(config: &TrainingConfig) -> Result<()> {
    require_positive("batch_size", config.batch_size)?;
    require_positive("num_epochs", config.num_epochs)?;
    require_positive("save_freq", config.save_freq)?;
    require_positive("log_freq", config.log_freq)?;
    require_positive("val_freq", config.val_freq)?;

    require_finite("learning_rate", config.learning_rate)?;
    if config.learning_rate <= 0.0 {
        return Err(Error::validation(format!(
            "learning_rate must be positive, got {}",
            config.learning_rate
        )));
    }

    require_finite("weight_decay", config.weight_decay)?;
    require_non_negative("weight_decay", config.weight_decay)?;

    let weights = [
        ("dice_weight", config.dice_weight),
        ("bce_weight", config.bce_weight),
        ("adaptive_weight", config.adaptive_weight),
    ];
    for (name, weight) in weights {
        require_finite(name, weight)?;
        require_non_negative(name, weight)?;
    }
    if weights.iter().map(|(_, w)| w).sum::<f64>() <= 0.0 {
        return Err(Error::validation(
            "at least one loss weight must be positive",
        ));
    }

    if config.warmup_epochs > config.num_epochs {
        return Err(Error::validation(format!(
            "warmup_epochs ({}) must not exceed num_epochs ({})",
            config.warmup_epochs, config.num_epochs
        )));
    }

    if !is_valid_device(&config.device) {
        return Err(Error::validation(format!(
            "device must be cpu, cuda, cuda:N or mps, got '{}'",
            config.device
        )));
    }

    Ok(())
}

/// Validate a data configuration.
pub fn validate_data_config(config: &DataConfig) -> Result<()> {
    require_path("train_data_path", &config.train_data_path)?;
    require_path("val_data_path", &config.val_data_path)?;
    require_path("test_data_path", &config.test_data_path)?;

    let (min_copies, max_copies) = config.num_copies_range;
    if min_copies == 0 {
        return Err(Error::validation(
            "num_copies_range lower bound must be at least 1",
        ));
    }
    if min_copies > max_copies {
        return Err(Error::validation(format!(
            "num_copies_range must be ordered, got ({min_copies}, {max_copies})"
        )));
    }

    let (min_area, max_area) = config.copy_area_range;
    require_finite("copy_area_range", min_area)?;
    require_finite("copy_area_range", max_area)?;
    if min_area <= 0.0 || max_area > 1.0 {
        return Err(Error::validation(format!(
            "copy_area_range must lie within (0, 1], got ({min_area}, {max_area})"
        )));
    }
    if min_area > max_area {
        return Err(Error::validation(format!(
            "copy_area_range must be ordered, got ({min_area}, {max_area})"
        )));
    }

    if config.rotation_range > MAX_ROTATION {
        return Err(Error::validation(format!(
            "rotation_range must be at most {MAX_ROTATION}, got {}",
            config.rotation_range
        )));
    }

    for (name, value) in [
        ("brightness_range", config.brightness_range),
        ("contrast_range", config.contrast_range),
    ] {
        require_finite(name, value)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::validation(format!(
                "{name} must be in [0, 1], got {value}"
            )));
        }
    }

    Ok(())
}

fn require_positive(name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::validation(format!("{name} must be at least 1")));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(Error::validation(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

fn require_path(name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::validation(format!("{name} must not be empty")));
    }
    Ok(())
}

fn is_valid_device(device: &str) -> bool {
    match device {
        "cpu" | "cuda" | "mps" => true,
        other => other
            .strip_prefix("cuda:")
            .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())),
    }
}
