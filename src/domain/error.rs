use std::io;

use thiserror::Error;

/// Library-wide error type for ferry operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An object is present where the operation requires absence.
    #[error("Object at '{0}' already exists")]
    ObjectStillExists(String),

    /// An object is absent where the operation requires presence.
    #[error("Object at '{0}' does not exist")]
    ObjectNotFound(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Config(String),

    /// Config file missing at the expected location.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// A path could not be interpreted (no final component, bad unicode).
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure reported by the SSH session or its SFTP channel.
    #[error("SSH error: {0}")]
    Ssh(#[from] ssh2::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }
}
