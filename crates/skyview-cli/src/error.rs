//! Error types for the command-line front end.

use std::path::PathBuf;

use skyview_core::{ConfigError, EngineError};

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration or reference tables could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The engine rejected the profile.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// An input file is not valid JSON for its shape, or the report could
    /// not be written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
