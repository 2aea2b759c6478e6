//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Per-file progress reporting with an optional progress bar
//! - Run summaries

pub mod console;
pub mod progress;
pub mod reporter;
pub mod stats;

pub use console::{print_error, print_info, print_line, print_warning, Notice};
pub use progress::create_item_bar;
pub use reporter::{ConsoleReporter, Reporter};
pub use stats::{print_failures, print_report};
