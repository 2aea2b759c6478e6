//! Batch run state shared by the converter and the renamer.

pub mod state;

pub use state::{BatchReport, FileFailure, JobKind};
