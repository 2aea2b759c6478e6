//! Directory listing and extension filtering.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Case-insensitive file name suffix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from extensions given with or without a leading dot.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|e| {
                let e = e.as_ref();
                format!(".{}", e.strip_prefix('.').unwrap_or(e).to_ascii_lowercase())
            })
            .collect();
        Self { suffixes }
    }

    /// Whether a file name ends in one of the extensions, ignoring ASCII case.
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix))
    }
}

/// A file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// List the regular files in `dir` whose names pass `filter`.
///
/// The listing is taken once; order is whatever the host returns.
/// Subdirectories and names that are not valid UTF-8 are skipped.
pub fn list_matching(dir: &Path, filter: &ExtensionFilter) -> Result<Vec<SourceFile>> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| Error::file_io("Failed to read directory", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::file_io("Failed to read directory", dir, e))?;
        let path = entry.path();

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!("Skipping non UTF-8 name: {}", path.display());
            continue;
        };

        if !filter.matches(&file_name) {
            continue;
        }

        if !path.is_file() {
            tracing::debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        files.push(SourceFile { path, file_name });
    }

    Ok(files)
}
