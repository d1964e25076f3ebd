//! Application-wide constants.
//!
//! Default hyperparameters live here so the record definitions and the
//! tests agree on a single value.

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "transcmfd";

/// Default directory for `create_default_configs`.
pub const DEFAULT_EXPERIMENTS_DIR: &str = "experiments";

/// Suffix appended to a record name to form its file name.
pub const CONFIG_FILE_SUFFIX: &str = "_config.yaml";

/// Model architecture defaults.
pub mod model {
    /// Square input image side in pixels.
    pub const INPUT_SIZE: u32 = 256;
    /// RGB input.
    pub const INPUT_CHANNELS: u32 = 3;
    /// Transformer patch side in pixels.
    pub const PATCH_SIZE: u32 = 16;
    /// Transformer embedding dimension.
    pub const EMBED_DIM: u32 = 768;
    /// Attention heads per layer.
    pub const NUM_HEADS: u32 = 12;
    /// Transformer depth.
    pub const NUM_LAYERS: u32 = 12;
    /// Dropout probability.
    pub const DROPOUT: f64 = 0.1;
    /// Block size of the feature similarity module.
    pub const CORRELATION_BLOCK_SIZE: u32 = 16;
    /// Percentile used to threshold similarity maps.
    pub const SIMILARITY_PERCENTILE: f64 = 0.95;
    /// Binary segmentation.
    pub const NUM_CLASSES: u32 = 1;
}

/// Training defaults.
pub mod training {
    /// Samples per batch.
    pub const BATCH_SIZE: u32 = 16;
    /// Total epochs.
    pub const NUM_EPOCHS: u32 = 100;
    /// Base learning rate.
    pub const LEARNING_RATE: f64 = 1e-4;
    /// Weight decay.
    pub const WEIGHT_DECAY: f64 = 1e-5;
    /// Dice loss weight.
    pub const DICE_WEIGHT: f64 = 0.5;
    /// Binary cross-entropy loss weight.
    pub const BCE_WEIGHT: f64 = 0.4;
    /// Adaptive loss weight.
    pub const ADAPTIVE_WEIGHT: f64 = 0.1;
    /// Linear warmup epochs.
    pub const WARMUP_EPOCHS: u32 = 10;
    /// Compute device.
    pub const DEVICE: &str = "cuda";
    /// Data loader workers.
    pub const NUM_WORKERS: u32 = 4;
    /// Checkpoint every N epochs.
    pub const SAVE_FREQ: u32 = 10;
    /// Log every N steps.
    pub const LOG_FREQ: u32 = 100;
    /// Validate every N epochs.
    pub const VAL_FREQ: u32 = 1;
}

/// Dataset defaults.
pub mod data {
    /// Training split directory.
    pub const TRAIN_DATA_PATH: &str = "data/train";
    /// Validation split directory.
    pub const VAL_DATA_PATH: &str = "data/val";
    /// Test split directory.
    pub const TEST_DATA_PATH: &str = "data/test";
    /// Number of synthetic forgeries to generate.
    pub const SYNTHETIC_SAMPLES: u32 = 10_000;
    /// Copied regions per synthetic image (inclusive).
    pub const NUM_COPIES_RANGE: (u32, u32) = (1, 3);
    /// Copied area as a fraction of the image area.
    pub const COPY_AREA_RANGE: (f64, f64) = (0.05, 0.2);
    /// Maximum rotation in degrees.
    pub const ROTATION_RANGE: u32 = 30;
    /// Brightness jitter.
    pub const BRIGHTNESS_RANGE: f64 = 0.2;
    /// Contrast jitter.
    pub const CONTRAST_RANGE: f64 = 0.2;
    /// Largest accepted rotation.
    pub const MAX_ROTATION: u32 = 180;
}
