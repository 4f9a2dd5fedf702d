//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code.

use parlor_engine::errors::GameError;
use parlor_madlibs::MadLibsError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    #[error("{0}")]
    MadLibs(#[from] MadLibsError),

    /// Operation was interrupted (e.g., by user with Ctrl+C)
    #[error("Interrupted: {0}")]
    Interrupted(String),
}
