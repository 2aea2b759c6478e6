//! Filename generation and validation.

use std::path::Path;

use uuid::Uuid;

use crate::error::{Error, Result};

/// Extension written by the converter.
pub const WEBP_EXTENSION: &str = "webp";

/// Name of the WEBP file derived from a source file name.
///
/// Only the last extension is replaced, so `a.b.jpg` becomes `a.b.webp`.
/// A dot-file without a further extension keeps its whole name as the stem.
pub fn webp_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{}.{}", stem, WEBP_EXTENSION)
}

/// Build `<date>_<token>.<extension>`.
pub fn dated_file_name(date: &str, token: &Uuid, extension: &str) -> String {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    format!("{}_{}.{}", date, token.hyphenated(), extension)
}

/// Check that a name is usable as a single directory entry.
///
/// Rejects empty names, `.`/`..`, path separators and null bytes.
pub fn validate_path_component(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidPathComponent(
            "Name cannot be empty or whitespace-only".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidPathComponent(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidPathComponent(format!(
            "Path separators not allowed: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidPathComponent(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webp_file_name() {
        assert_eq!(webp_file_name("a.JPG"), "a.webp");
        assert_eq!(webp_file_name("holiday.2024.jpeg"), "holiday.2024.webp");
        assert_eq!(webp_file_name(".jpg"), ".jpg.webp");
    }

    #[test]
    fn test_dated_file_name() {
        let token = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            dated_file_name("2024-03-09", &token, "jpeg"),
            "2024-03-09_67e55044-10b1-426f-9247-bb680e5fe0c8.jpeg"
        );
        assert_eq!(
            dated_file_name("2024-03-09", &token, ".jpeg"),
            "2024-03-09_67e55044-10b1-426f-9247-bb680e5fe0c8.jpeg"
        );
    }

    #[test]
    fn test_validate_path_component() {
        assert!(validate_path_component("original").is_ok());
        assert!(validate_path_component("originals 2024").is_ok());
        assert!(validate_path_component("").is_err());
        assert!(validate_path_component("  ").is_err());
        assert!(validate_path_component(".").is_err());
        assert!(validate_path_component("..").is_err());
        assert!(validate_path_component("v1..2").is_ok());
        assert!(validate_path_component("...").is_ok());
        assert!(validate_path_component("a/b").is_err());
        assert!(validate_path_component("a\\b").is_err());
        assert!(validate_path_component("a\0b").is_err());
    }
}
