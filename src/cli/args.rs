//! CLI argument definitions.

use crate::config::ConfigKind;
use crate::constants::DEFAULT_EXPERIMENTS_DIR;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration toolkit for TransCMFD copy-move forgery detection.
#[derive(Debug, Parser)]
#[command(name = "transcmfd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Logging options.
    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write default model, training and data configs into a directory.
    Init {
        /// Target directory.
        #[arg(default_value = DEFAULT_EXPERIMENTS_DIR, env = "TRANSCMFD_EXPERIMENTS_DIR")]
        dir: PathBuf,
    },
    /// Print a config file.
    Show {
        /// Path to a YAML config file.
        path: PathBuf,
        /// Print as JSON instead of YAML.
        #[arg(long)]
        json: bool,
    },
    /// Check a config file against its record schema.
    Validate {
        /// Path to a YAML config file.
        path: PathBuf,
        /// Record kind (inferred from the file name if omitted).
        #[arg(short, long, value_enum)]
        kind: Option<ConfigKind>,
    },
    /// Print the default config of one kind.
    Defaults {
        /// Record kind.
        #[arg(value_enum)]
        kind: ConfigKind,
    },
}

/// Logging verbosity flags.
#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Suppress informational output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_init_default_dir() {
        let cli = Cli::try_parse_from(["transcmfd", "init"]).unwrap();
        match cli.command {
            Command::Init { dir } => assert_eq!(dir, PathBuf::from("experiments")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init_custom_dir() {
        let cli = Cli::try_parse_from(["transcmfd", "init", "runs/exp1", "-q"]).unwrap();
        assert!(cli.logging.quiet);
        assert!(matches!(cli.command, Command::Init { dir } if dir == PathBuf::from("runs/exp1")));
    }

    #[test]
    fn test_cli_parse_validate_with_kind() {
        let cli =
            Cli::try_parse_from(["transcmfd", "validate", "cfg.yaml", "--kind", "training"])
                .unwrap();
        match cli.command {
            Command::Validate { path, kind } => {
                assert_eq!(path, PathBuf::from("cfg.yaml"));
                assert_eq!(kind, Some(ConfigKind::Training));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_verbose_count() {
        let cli = Cli::try_parse_from(["transcmfd", "-vv", "defaults", "model"]).unwrap();
        assert_eq!(cli.logging.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["transcmfd", "defaults", "optimizer"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["transcmfd"]).is_err());
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["transcmfd", "-q", "-v", "defaults", "data"]).is_err());
    }
}
