//! Configuration validation logic.

use std::sync::LazyLock;

use crate::config::loader::{Config, ConvertConfig, RenameConfig};
use crate::error::{Error, Result};
use crate::fs::{validate_path_component, WEBP_EXTENSION};
use regex::Regex;

/// Lowest accepted WEBP quality.
const MIN_QUALITY: f32 = 0.0;

/// Highest accepted WEBP quality.
const MAX_QUALITY: f32 = 100.0;

static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("extension pattern is valid"));

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_convert(&config.convert)?;
    validate_rename(&config.rename)?;

    Ok(())
}

/// Validate the converter section.
pub fn validate_convert(config: &ConvertConfig) -> Result<()> {
    validate_quality(config.quality)?;
    validate_extensions("convert.extensions", &config.extensions)?;

    // A source named <stem>.webp would be overwritten by its own output
    if let Some(extension) = config
        .extensions
        .iter()
        .find(|e| e.strip_prefix('.').unwrap_or(e.as_str()).eq_ignore_ascii_case(WEBP_EXTENSION))
    {
        return Err(Error::ConfigValidation {
            field: "convert.extensions".to_string(),
            message: format!("Extension '{}' is the conversion target", extension),
        });
    }

    validate_path_component(&config.archive_dir_name).map_err(|e| Error::ConfigValidation {
        field: "convert.archive_dir_name".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Validate the renamer section.
pub fn validate_rename(config: &RenameConfig) -> Result<()> {
    validate_extensions("rename.extensions", &config.extensions)?;
    validate_extension("rename.output_extension", &config.output_extension)?;

    Ok(())
}

/// Validate the WEBP quality.
pub fn validate_quality(quality: f32) -> Result<()> {
    if !quality.is_finite() || !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(Error::ConfigValidation {
            field: "convert.quality".to_string(),
            message: format!(
                "Quality must be between {} and {} (got {})",
                MIN_QUALITY, MAX_QUALITY, quality
            ),
        });
    }

    Ok(())
}

/// Validate an extension filter list.
pub fn validate_extensions<S: AsRef<str>>(field: &str, extensions: &[S]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "At least one extension is required".to_string(),
        });
    }

    for extension in extensions {
        validate_extension(field, extension.as_ref())?;
    }

    Ok(())
}

/// Validate a single extension. A leading dot is accepted.
pub fn validate_extension(field: &str, extension: &str) -> Result<()> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);

    if !EXTENSION_PATTERN.is_match(bare) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Extension '{}' must be non-empty and alphanumeric",
                extension
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_quality_bounds() {
        assert!(validate_quality(0.0).is_ok());
        assert!(validate_quality(100.0).is_ok());
        assert!(validate_quality(-1.0).is_err());
        assert!(validate_quality(100.5).is_err());
        assert!(validate_quality(f32::NAN).is_err());
    }

    #[test]
    fn test_extensions() {
        assert!(validate_extensions("f", &["jpg", ".JPEG"]).is_ok());
        assert!(validate_extensions::<&str>("f", &[]).is_err());
        assert!(validate_extensions("f", &["tar.gz"]).is_err());
        assert!(validate_extensions("f", &["."]).is_err());
    }

    #[test]
    fn test_archive_dir_must_be_single_component() {
        let mut config = Config::default();
        config.convert.archive_dir_name = "../elsewhere".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { field, .. }) if field == "convert.archive_dir_name"
        ));

        config.convert.archive_dir_name = "a/b".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_webp_is_not_a_convert_source() {
        let mut config = Config::default();
        for extensions in [vec!["jpg", "webp"], vec![".WebP"]] {
            config.convert.extensions = extensions.into_iter().map(String::from).collect();
            assert!(matches!(
                validate_convert(&config.convert),
                Err(Error::ConfigValidation { field, .. }) if field == "convert.extensions"
            ));
        }

        config.convert.extensions = vec!["png".to_string()];
        assert!(validate_convert(&config.convert).is_ok());
    }

    #[test]
    fn test_sections_validate_independently() {
        let mut config = Config::default();
        config.rename.extensions.clear();
        config.rename.output_extension = "jp g".to_string();

        assert!(validate_convert(&config.convert).is_ok());
        assert!(validate_rename(&config.rename).is_err());

        let mut config = Config::default();
        config.convert.quality = 250.0;
        assert!(validate_rename(&config.rename).is_ok());
        assert!(validate_convert(&config.convert).is_err());
    }

    #[test]
    fn test_output_extension_checked() {
        let mut config = Config::default();
        config.rename.output_extension = "jp g".to_string();
        assert!(validate_config(&config).is_err());
    }
}
