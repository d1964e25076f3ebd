//! transcmfd - configuration toolkit for TransCMFD experiments.
//!
//! TransCMFD detects copy-move forgeries with a hybrid CNN/Transformer
//! model. This crate owns its configuration: the model, training and data
//! records, their YAML persistence, and validation on load.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;

use clap::Parser;
use cli::{Cli, Command, LoggingArgs};
use config::{ConfigKind, ConfigManager};
use constants::APP_NAME;
use std::path::Path;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the transcmfd CLI.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.logging);

    let manager = ConfigManager::new();
    match cli.command {
        Command::Init { dir } => {
            let written = manager.create_default_configs(&dir)?;
            for path in &written {
                println!("Created: {}", path.display());
            }
            println!("Configuration system created");
            Ok(())
        }
        Command::Show { path, json } => {
            print!("{}", render_config(&manager, &path, json)?);
            Ok(())
        }
        Command::Validate { path, kind } => {
            let kind = kind.map_or_else(|| ConfigKind::from_path(&path), Ok)?;
            kind.check_mapping(manager.load(&path)?)?;
            debug!("{} is a valid {kind} config", path.display());
            println!("{}: ok ({kind} config)", path.display());
            Ok(())
        }
        Command::Defaults { kind } => {
            let yaml = serde_yaml::to_string(&kind.default_mapping()?)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{yaml}");
            Ok(())
        }
    }
}

/// Render a config file as YAML or pretty JSON.
fn render_config(manager: &ConfigManager, path: &Path, json: bool) -> Result<String> {
    let mapping = manager.load(path)?;
    if json {
        let mut text =
            serde_json::to_string_pretty(&mapping).map_err(|e| Error::JsonSerialize { source: e })?;
        text.push('\n');
        Ok(text)
    } else {
        serde_yaml::to_string(&mapping).map_err(|e| Error::ConfigSerialize { source: e })
    }
}

fn init_logging(args: &LoggingArgs) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = if args.quiet {
        "warn"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{APP_NAME}={level},warn")));

    // Command output goes to stdout, so keep it free of log lines.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
