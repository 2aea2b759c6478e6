//! The date-based rename batch job.

use uuid::Uuid;

use crate::batch::{BatchReport, JobKind};
use crate::config::{OptionsConfig, RenameConfig};
use crate::error::Result;
use crate::fs::{dated_file_name, list_matching, rename_no_clobber, ExtensionFilter, SourceFile};
use crate::output::Reporter;
use crate::rename::timestamp::{format_date, read_timestamp};

/// Line reported once every file has been handled.
pub const COMPLETION_MESSAGE: &str = "All JPEG files have been renamed.";

/// Rename every matching file to `<date>_<uuid>.<ext>` in place.
pub fn run_rename(
    config: &RenameConfig,
    options: &OptionsConfig,
    reporter: &mut dyn Reporter,
) -> Result<BatchReport> {
    let filter = ExtensionFilter::new(&config.extensions);
    let sources = list_matching(&config.directory, &filter)?;

    tracing::debug!(
        "Renaming {} file(s) in {} by {} time",
        sources.len(),
        config.directory.display(),
        config.timestamp
    );

    let mut report = BatchReport::new(JobKind::Rename, options.dry_run);
    report.matched = sources.len() as u64;
    reporter.start(report.matched);

    for source in &sources {
        match rename_one(config, options, source, reporter) {
            Ok(()) => report.record_success(),
            Err(e) => {
                report.handle_failure(options.failure_policy, source.path.clone(), e, reporter)?
            }
        }
        reporter.advance();
    }

    reporter.finish();
    reporter.line(COMPLETION_MESSAGE);
    Ok(report)
}

fn rename_one(
    config: &RenameConfig,
    options: &OptionsConfig,
    source: &SourceFile,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let timestamp = read_timestamp(&source.path, config.timestamp)?;
    let date = format_date(timestamp);
    let new_name = dated_file_name(&date, &Uuid::new_v4(), &config.output_extension);

    if options.dry_run {
        reporter.line(&format!("Would rename {} to {}", source.file_name, new_name));
        return Ok(());
    }

    rename_no_clobber(&source.path, &source.path.with_file_name(&new_name))?;
    reporter.line(&format!("Renamed {} to {}", source.file_name, new_name));

    Ok(())
}
