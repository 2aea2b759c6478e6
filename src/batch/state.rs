//! Batch run bookkeeping.

use std::fmt;
use std::path::PathBuf;

use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::output::Reporter;

/// Which job produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Convert,
    Rename,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Convert => write!(f, "convert"),
            JobKind::Rename => write!(f, "rename"),
        }
    }
}

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub job: JobKind,

    // Statistics
    pub matched: u64,
    pub processed: u64,

    // Failures collected under FailurePolicy::Continue
    pub failures: Vec<FileFailure>,

    pub dry_run: bool,
}

impl BatchReport {
    /// Create an empty report for a job.
    pub fn new(job: JobKind, dry_run: bool) -> Self {
        Self {
            job,
            matched: 0,
            processed: 0,
            failures: Vec::new(),
            dry_run,
        }
    }

    /// Count a successfully processed file.
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    /// Apply the failure policy to a per-file error.
    ///
    /// Under `Abort` the error is returned to stop the run. Under `Continue`
    /// it is reported, recorded and swallowed.
    pub fn handle_failure(
        &mut self,
        policy: FailurePolicy,
        path: PathBuf,
        error: Error,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        match policy {
            FailurePolicy::Abort => Err(error),
            FailurePolicy::Continue => {
                tracing::warn!("Skipping {}: {}", path.display(), error);
                reporter.failure(&error.to_string());
                self.failures.push(FileFailure {
                    path,
                    message: error.to_string(),
                });
                Ok(())
            }
        }
    }

    /// Number of files that failed.
    pub fn failed(&self) -> u64 {
        self.failures.len() as u64
    }

    /// Whether any file failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Turn collected failures into an error for the process exit status.
    pub fn into_result(self) -> Result<Self> {
        if self.has_failures() {
            return Err(Error::PartialFailure(self.failures.len()));
        }
        Ok(self)
    }
}
