//! Configuration structures and loading logic.

use crate::config::policy::{FailurePolicy, TimestampSource};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "photo-batch.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// JPEG to WEBP converter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Directory scanned for source images.
    #[serde(default = "default_convert_directory")]
    pub input_directory: PathBuf,

    /// Name of the subdirectory originals are moved into.
    #[serde(default = "default_archive_dir_name")]
    pub archive_dir_name: String,

    /// Lossy WEBP quality, 0 to 100.
    #[serde(default = "default_quality")]
    pub quality: f32,

    /// Extensions (without dot) treated as source images.
    #[serde(default = "default_convert_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_directory: default_convert_directory(),
            archive_dir_name: default_archive_dir_name(),
            quality: default_quality(),
            extensions: default_convert_extensions(),
        }
    }
}

impl ConvertConfig {
    /// Directory the originals end up in.
    pub fn archive_directory(&self) -> PathBuf {
        self.input_directory.join(&self.archive_dir_name)
    }
}

/// Date-based renamer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Directory whose files are renamed in place.
    #[serde(default = "default_rename_directory")]
    pub directory: PathBuf,

    /// Extensions (without dot) selected for renaming.
    #[serde(default = "default_rename_extensions")]
    pub extensions: Vec<String>,

    /// Extension given to renamed files.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Timestamp the new name is dated by.
    #[serde(default)]
    pub timestamp: TimestampSource,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            directory: default_rename_directory(),
            extensions: default_rename_extensions(),
            output_extension: default_output_extension(),
            timestamp: TimestampSource::default(),
        }
    }
}

/// Options shared by both jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Behaviour on a per-file failure.
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Report planned actions without touching the file system.
    #[serde(default)]
    pub dry_run: bool,

    /// Suppress per-file progress lines.
    #[serde(default)]
    pub quiet: bool,

    /// Draw a progress bar while processing.
    #[serde(default)]
    pub progress_bar: bool,
}

fn default_convert_directory() -> PathBuf {
    PathBuf::from("./raw")
}

fn default_archive_dir_name() -> String {
    "original".to_string()
}

fn default_quality() -> f32 {
    70.0
}

fn default_convert_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string()]
}

fn default_rename_directory() -> PathBuf {
    PathBuf::from("./static/photos/new")
}

fn default_rename_extensions() -> Vec<String> {
    vec!["jpeg".to_string()]
}

fn default_output_extension() -> String {
    "jpeg".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::file_io("Failed to read configuration", path, e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Locate and load the configuration.
    ///
    /// An explicit path must exist. Otherwise the working directory and then the
    /// per-user config directory are searched, falling back to built-in defaults.
    /// Returns the path the configuration was read from, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in Self::candidate_paths() {
            if candidate.is_file() {
                tracing::debug!("Using configuration file {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Paths searched for a configuration file, in priority order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dirs) = ProjectDirs::from("", "", "photo-batch") {
            paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}
