//! Photo Batch - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use photo_batch::{
    batch::BatchReport,
    cli::{Args, Command},
    config::{validate_convert, validate_rename, Config, OptionsConfig},
    convert::run_convert,
    error::{exit_codes, Error, Result},
    output::{print_error, print_failures, print_info, print_report, print_warning, ConsoleReporter},
    rename::run_rename,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::InvalidPathComponent(_)
                | Error::TargetIsSource { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Decode { .. } | Error::Encode { .. } => {
                    ExitCode::from(exit_codes::IMAGE_ERROR as u8)
                }
                Error::FileIo { .. }
                | Error::CreationTimeUnavailable { .. }
                | Error::RenameCollision { .. } => ExitCode::from(exit_codes::IO_ERROR as u8),
                Error::PartialFailure(_) => ExitCode::from(exit_codes::PARTIAL_FAILURE as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout is reserved for progress lines
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration and apply CLI overrides
    let (mut config, source) = Config::discover(args.config.as_deref())?;
    args.merge_into_config(&mut config);

    match &args.command {
        Command::Convert(_) => {
            validate_convert(&config.convert)?;
            let mut reporter = ConsoleReporter::new(
                "convert",
                config.options.quiet,
                config.options.progress_bar,
            );
            let report = run_convert(&config.convert, &config.options, &mut reporter)?;
            finish_batch(&config.options, report)
        }
        Command::Rename(_) => {
            validate_rename(&config.rename)?;
            let mut reporter = ConsoleReporter::new(
                "rename",
                config.options.quiet,
                config.options.progress_bar,
            );
            let report = run_rename(&config.rename, &config.options, &mut reporter)?;
            finish_batch(&config.options, report)
        }
        Command::ShowConfig => {
            match &source {
                Some(path) => print_info(&format!("Configuration file: {}", path.display())),
                None => print_info("No configuration file found, showing defaults"),
            }
            println!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Print the end-of-run output and turn collected failures into an exit status.
fn finish_batch(options: &OptionsConfig, report: BatchReport) -> Result<()> {
    if !options.quiet {
        if report.dry_run {
            print_warning("Dry run: no files were changed.");
        }
        if options.progress_bar {
            print_report(&report);
        }
    }

    print_failures(&report);
    report.into_result().map(|_| ())
}
