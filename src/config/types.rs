//! Configuration record definitions.

use crate::constants::{data, model, training};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// TransCMFD model architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    // Input
    /// Square input image side in pixels.
    pub input_size: u32,
    /// Number of input channels.
    pub input_channels: u32,

    // CNN encoder
    /// Encoder backbone network.
    pub encoder_backbone: EncoderBackbone,
    /// Start from pretrained encoder weights.
    pub encoder_pretrained: bool,
    /// Freeze encoder weights during training.
    pub encoder_freeze: bool,

    // Transformer
    /// Patch side in pixels.
    pub patch_size: u32,
    /// Embedding dimension.
    pub embed_dim: u32,
    /// Attention heads per layer.
    pub num_heads: u32,
    /// Number of transformer layers.
    pub num_layers: u32,
    /// Dropout probability.
    pub dropout: f64,

    // Feature similarity module
    /// Block size for feature correlation.
    pub correlation_block_size: u32,
    /// Percentile used to threshold similarity maps.
    pub similarity_percentile: f64,

    /// Output classes (1 = binary segmentation).
    pub num_classes: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            input_size: model::INPUT_SIZE,
            input_channels: model::INPUT_CHANNELS,
            encoder_backbone: EncoderBackbone::default(),
            encoder_pretrained: true,
            encoder_freeze: false,
            patch_size: model::PATCH_SIZE,
            embed_dim: model::EMBED_DIM,
            num_heads: model::NUM_HEADS,
            num_layers: model::NUM_LAYERS,
            dropout: model::DROPOUT,
            correlation_block_size: model::CORRELATION_BLOCK_SIZE,
            similarity_percentile: model::SIMILARITY_PERCENTILE,
            num_classes: model::NUM_CLASSES,
        }
    }
}

/// Training hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Samples per batch.
    pub batch_size: u32,
    /// Total training epochs.
    pub num_epochs: u32,
    /// Base learning rate.
    pub learning_rate: f64,
    /// Weight decay.
    pub weight_decay: f64,

    // Loss weights
    /// Dice loss weight.
    pub dice_weight: f64,
    /// Binary cross-entropy loss weight.
    pub bce_weight: f64,
    /// Adaptive loss weight.
    pub adaptive_weight: f64,

    /// Optimizer.
    pub optimizer: OptimizerKind,
    /// Learning rate schedule.
    pub scheduler: SchedulerKind,
    /// Linear warmup epochs.
    pub warmup_epochs: u32,

    // Hardware
    /// Compute device (`cpu`, `cuda`, `cuda:N`, `mps`).
    pub device: String,
    /// Data loader workers.
    pub num_workers: u32,
    /// Pin host memory for device transfers.
    pub pin_memory: bool,

    // Logging and checkpoints
    /// Checkpoint every N epochs.
    pub save_freq: u32,
    /// Log every N steps.
    pub log_freq: u32,
    /// Validate every N epochs.
    pub val_freq: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            batch_size: training::BATCH_SIZE,
            num_epochs: training::NUM_EPOCHS,
            learning_rate: training::LEARNING_RATE,
            weight_decay: training::WEIGHT_DECAY,
            dice_weight: training::DICE_WEIGHT,
            bce_weight: training::BCE_WEIGHT,
            adaptive_weight: training::ADAPTIVE_WEIGHT,
            optimizer: OptimizerKind::default(),
            scheduler: SchedulerKind::default(),
            warmup_epochs: training::WARMUP_EPOCHS,
            device: training::DEVICE.to_string(),
            num_workers: training::NUM_WORKERS,
            pin_memory: true,
            save_freq: training::SAVE_FREQ,
            log_freq: training::LOG_FREQ,
            val_freq: training::VAL_FREQ,
        }
    }
}

/// Dataset locations and synthetic data generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Training split directory.
    pub train_data_path: PathBuf,
    /// Validation split directory.
    pub val_data_path: PathBuf,
    /// Test split directory.
    pub test_data_path: PathBuf,

    // Synthetic data generation
    /// Number of synthetic forgeries to generate.
    pub synthetic_samples: u32,
    /// Inclusive range of copied regions per image.
    pub num_copies_range: (u32, u32),
    /// Copied area as a fraction of the image area.
    pub copy_area_range: (f64, f64),

    // Augmentation
    /// Enable data augmentation.
    pub use_augmentation: bool,
    /// Maximum rotation in degrees.
    pub rotation_range: u32,
    /// Brightness jitter.
    pub brightness_range: f64,
    /// Contrast jitter.
    pub contrast_range: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            train_data_path: PathBuf::from(data::TRAIN_DATA_PATH),
            val_data_path: PathBuf::from(data::VAL_DATA_PATH),
            test_data_path: PathBuf::from(data::TEST_DATA_PATH),
            synthetic_samples: data::SYNTHETIC_SAMPLES,
            num_copies_range: data::NUM_COPIES_RANGE,
            copy_area_range: data::COPY_AREA_RANGE,
            use_augmentation: true,
            rotation_range: data::ROTATION_RANGE,
            brightness_range: data::BRIGHTNESS_RANGE,
            contrast_range: data::CONTRAST_RANGE,
        }
    }
}

/// CNN encoder backbone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderBackbone {
    /// ResNet-18.
    Resnet18,
    /// ResNet-34.
    Resnet34,
    /// ResNet-50.
    #[default]
    Resnet50,
    /// ResNet-101.
    Resnet101,
    /// ResNet-152.
    Resnet152,
}

impl std::fmt::Display for EncoderBackbone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resnet18 => write!(f, "resnet18"),
            Self::Resnet34 => write!(f, "resnet34"),
            Self::Resnet50 => write!(f, "resnet50"),
            Self::Resnet101 => write!(f, "resnet101"),
            Self::Resnet152 => write!(f, "resnet152"),
        }
    }
}

impl std::str::FromStr for EncoderBackbone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resnet18" => Ok(Self::Resnet18),
            "resnet34" => Ok(Self::Resnet34),
            "resnet50" => Ok(Self::Resnet50),
            "resnet101" => Ok(Self::Resnet101),
            "resnet152" => Ok(Self::Resnet152),
            other => Err(format!("unknown encoder backbone: {other}")),
        }
    }
}

/// Optimizer algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    /// Adam.
    Adam,
    /// Adam with decoupled weight decay.
    #[default]
    AdamW,
    /// Stochastic gradient descent.
    Sgd,
}

impl std::fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adam => write!(f, "adam"),
            Self::AdamW => write!(f, "adamw"),
            Self::Sgd => write!(f, "sgd"),
        }
    }
}

impl std::str::FromStr for OptimizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adam" => Ok(Self::Adam),
            "adamw" => Ok(Self::AdamW),
            "sgd" => Ok(Self::Sgd),
            other => Err(format!("unknown optimizer: {other}")),
        }
    }
}

/// Learning rate schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerKind {
    /// Cosine annealing.
    #[default]
    Cosine,
    /// Step decay.
    Step,
    /// Reduce on plateau.
    Plateau,
    /// Fixed learning rate.
    Constant,
}

impl std::fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cosine => write!(f, "cosine"),
            Self::Step => write!(f, "step"),
            Self::Plateau => write!(f, "plateau"),
            Self::Constant => write!(f, "constant"),
        }
    }
}

impl std::str::FromStr for SchedulerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "step" => Ok(Self::Step),
            "plateau" => Ok(Self::Plateau),
            "constant" | "none" => Ok(Self::Constant),
            other => Err(format!("unknown scheduler: {other}")),
        }
    }
}
