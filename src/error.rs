//! Error types for transcmfd.

use std::path::PathBuf;

/// Result type alias for transcmfd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for transcmfd.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration file is valid YAML but not a top-level mapping.
    #[error("config file '{path}' does not contain a top-level mapping")]
    ConfigNotMapping {
        /// Path to the config file.
        path: PathBuf,
    },

    /// Loaded mapping does not match the record schema.
    #[error("config '{name}' does not match its schema: {source}")]
    ConfigSchema {
        /// Record name (`model`, `training`, `data`).
        name: &'static str,
        /// Underlying deserialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to create a configuration directory.
    #[error("failed to create config directory '{path}'")]
    ConfigDirCreate {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Manager was asked for its default path but none was set.
    #[error("no default config path configured")]
    NoConfigPath,

    /// Record kind could not be determined.
    #[error("unknown config kind '{value}' (expected model, training or data)")]
    UnknownConfigKind {
        /// The unrecognized value.
        value: String,
    },

    /// Failed to render configuration as JSON.
    #[error("failed to serialize config as JSON")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a validation error from a message.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
