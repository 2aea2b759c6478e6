//! The JPEG to WEBP batch job.

use std::path::Path;

use crate::batch::{BatchReport, JobKind};
use crate::config::{ConvertConfig, OptionsConfig};
use crate::convert::encoder::convert_file;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, list_matching, move_file, webp_file_name, ExtensionFilter, SourceFile};
use crate::output::Reporter;

/// Convert every matching file in the input directory and archive the originals.
///
/// For each file a `<stem>.webp` sibling is written, then the source is moved
/// into the archive directory. The archive directory is created up front,
/// together with any missing parents of it.
pub fn run_convert(
    config: &ConvertConfig,
    options: &OptionsConfig,
    reporter: &mut dyn Reporter,
) -> Result<BatchReport> {
    let input = config.input_directory.as_path();
    let archive = config.archive_directory();

    let mut report = BatchReport::new(JobKind::Convert, options.dry_run);

    if !options.dry_run {
        ensure_dir(&archive)?;
    } else if !input.is_dir() {
        // A real run would create it and find nothing to convert
        reporter.line(&format!("Would create {}", archive.display()));
        return Ok(report);
    }

    let filter = ExtensionFilter::new(&config.extensions);
    let sources = list_matching(input, &filter)?;

    tracing::debug!(
        "Converting {} file(s) in {} at quality {}",
        sources.len(),
        input.display(),
        config.quality
    );

    report.matched = sources.len() as u64;
    reporter.start(report.matched);

    for source in &sources {
        match convert_one(config, options, &archive, source, reporter) {
            Ok(()) => report.record_success(),
            Err(e) => {
                report.handle_failure(options.failure_policy, source.path.clone(), e, reporter)?
            }
        }
        reporter.advance();
    }

    reporter.finish();
    Ok(report)
}

fn convert_one(
    config: &ConvertConfig,
    options: &OptionsConfig,
    archive: &Path,
    source: &SourceFile,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let webp_name = webp_file_name(&source.file_name);
    let webp_path = config.input_directory.join(&webp_name);
    let archived_path = archive.join(&source.file_name);

    if webp_path == source.path {
        return Err(Error::TargetIsSource {
            path: source.path.clone(),
        });
    }

    if options.dry_run {
        reporter.line(&format!(
            "Would convert {} to {}",
            source.file_name, webp_name
        ));
        reporter.line(&format!(
            "Would move {} to the '{}' directory.",
            source.file_name, config.archive_dir_name
        ));
        return Ok(());
    }

    convert_file(&source.path, &webp_path, config.quality)?;
    reporter.line(&format!("Converted {} to {}", source.file_name, webp_name));

    move_file(&source.path, &archived_path)?;
    reporter.line(&format!(
        "Moved {} to the '{}' directory.",
        source.file_name, config.archive_dir_name
    ));

    Ok(())
}
