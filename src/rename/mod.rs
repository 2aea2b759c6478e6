//! Date-based JPEG renamer.

pub mod job;
pub mod timestamp;

pub use job::{run_rename, COMPLETION_MESSAGE};
pub use timestamp::{format_date, read_timestamp};
