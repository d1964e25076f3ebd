//! YAML configuration file loading and saving.

use crate::config::ConfigRecord;
use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load a YAML file as a key-to-value mapping.
///
/// The content is not checked against any record schema. An empty
/// document loads as an empty mapping.
pub fn load_mapping(path: &Path) -> Result<Mapping> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let value: Value = serde_yaml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Loaded config file: {}", path.display());

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(Error::ConfigNotMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Save a mapping to a YAML file, creating parent directories as needed.
pub fn save_mapping(mapping: &Mapping, path: &Path) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = serde_yaml::to_string(mapping).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote config file: {}", path.display());
    Ok(())
}

/// Load and validate a typed record from a YAML file.
pub fn load_record<R: ConfigRecord>(path: &Path) -> Result<R> {
    R::from_mapping(load_mapping(path)?)
}

/// Save a typed record to a YAML file.
pub fn save_record<R: ConfigRecord>(record: &R, path: &Path) -> Result<()> {
    save_mapping(&record.to_mapping()?, path)
}
