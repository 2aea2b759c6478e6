//! Configuration module for photo-batch.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Batch policies shared by both jobs
//! - Configuration validation

pub mod loader;
pub mod policy;
pub mod validation;

pub use loader::{Config, ConvertConfig, OptionsConfig, RenameConfig, CONFIG_FILE_NAME};
pub use policy::{FailurePolicy, TimestampSource};
pub use validation::{validate_config, validate_convert, validate_rename};
