//! # CLI Error Type
//!
//! Unified error type for the terminal front-end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pico_args::Error ───┐                                                  │
//! │  ConfigError ────────┤                                                  │
//! │  ValidationError ────┼──► CliError ──► anyhow (main) ──► stderr         │
//! │  CoreError ──────────┤                                                  │
//! │  serde_json::Error ──┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use prize_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop a command from producing output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command line (unknown flag, missing value).
    #[error("Invalid arguments: {0}")]
    Args(#[from] pico_args::Error),

    /// Flags the parser accepted but nothing consumed.
    #[error("Unexpected arguments: {0}")]
    UnexpectedArgs(String),

    /// Unknown subcommand.
    #[error("Unknown command: {0} (try --help)")]
    UnknownCommand(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A value could not be turned into calculator input.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The calculator refused the input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
