//! Statistics reporting.

use console::style;

use crate::batch::{BatchReport, JobKind};

/// Print a summary of a batch run.
pub fn print_report(report: &BatchReport) {
    let verb = match report.job {
        JobKind::Convert => "Converted",
        JobKind::Rename => "Renamed",
    };

    println!();
    let title = if report.dry_run {
        format!("Summary ({}, dry run):", report.job)
    } else {
        format!("Summary ({}):", report.job)
    };
    println!("{}", style(title).bold());
    println!("  Matched:   {}", report.matched);
    println!("  {:<10} {}", format!("{}:", verb), report.processed);
    if report.has_failures() {
        println!("  Failed:    {}", style(report.failed()).red());
    }
}

/// Print every collected failure to stderr.
pub fn print_failures(report: &BatchReport) {
    if !report.has_failures() {
        return;
    }

    eprintln!();
    eprintln!(
        "{}",
        style(format!("{} file(s) could not be processed:", report.failed())).red()
    );
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.path.display(), failure.message);
    }
}
