//! Error types for the photo-batch utilities.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Image errors
    #[error("Failed to decode image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode WEBP for {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("{} is already the WEBP target of its own conversion", path.display())]
    TargetIsSource { path: PathBuf },

    // Renaming errors
    #[error("Creation time is not available for {}: {source}", path.display())]
    CreationTimeUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Refusing to overwrite existing file: {}", path.display())]
    RenameCollision { path: PathBuf },

    // File system errors
    #[error("Invalid path component: {0}")]
    InvalidPathComponent(String),

    #[error("{action} {}: {source}", path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // Batch outcome
    #[error("{0} file(s) failed")]
    PartialFailure(usize),
}

impl Error {
    /// Wrap an IO error with the action and path it occurred on.
    pub fn file_io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileIo {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const IO_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IMAGE_ERROR: i32 = 4;
    pub const PARTIAL_FAILURE: i32 = 6;
}
