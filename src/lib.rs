//! Photo Batch - small batch utilities for a photo folder.
//!
//! This library provides two one-shot jobs over a single directory.
//!
//! # Features
//!
//! - Convert JPEG files to lossy WEBP and archive the originals
//! - Rename JPEG files to `<YYYY-MM-DD>_<uuid>.jpeg` by creation date
//! - Abort-on-first-error or continue-and-collect failure policies
//! - Dry runs
//!
//! # Example
//!
//! ```no_run
//! use photo_batch::{run_convert, Config, ConsoleReporter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let mut reporter = ConsoleReporter::new("convert", false, false);
//!     let report = run_convert(&config.convert, &config.options, &mut reporter)?;
//!     println!("{} file(s) converted", report.processed);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod fs;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use batch::{BatchReport, FileFailure, JobKind};
pub use config::{Config, ConvertConfig, FailurePolicy, OptionsConfig, RenameConfig, TimestampSource};
pub use convert::run_convert;
pub use error::{Error, Result};
pub use output::{ConsoleReporter, Reporter};
pub use rename::run_rename;
