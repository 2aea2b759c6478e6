//! Per-file progress reporting.

use indicatif::ProgressBar;

use crate::output::console::{print_error, print_line};
use crate::output::progress::create_item_bar;

/// Sink for the progress lines a batch job emits.
pub trait Reporter {
    /// Called once with the number of matched files before processing starts.
    fn start(&mut self, _total: u64) {}

    /// A human-readable progress line.
    fn line(&mut self, message: &str);

    /// A per-file failure that did not stop the run.
    fn failure(&mut self, message: &str);

    /// Called after each file, successful or not.
    fn advance(&mut self) {}

    /// Called once when the run is over.
    fn finish(&mut self) {}
}

/// Reporter that writes to the terminal.
pub struct ConsoleReporter {
    label: String,
    quiet: bool,
    use_bar: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    /// Create a console reporter.
    ///
    /// `quiet` drops progress lines (failures are still shown); `use_bar`
    /// draws an item progress bar labelled with `label`.
    pub fn new(label: &str, quiet: bool, use_bar: bool) -> Self {
        Self {
            label: label.to_string(),
            quiet,
            use_bar,
            bar: None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn start(&mut self, total: u64) {
        if self.use_bar && total > 0 {
            self.bar = Some(create_item_bar(total, &self.label));
        }
    }

    fn line(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        match &self.bar {
            Some(bar) => bar.println(message),
            None => print_line(message),
        }
    }

    fn failure(&mut self, message: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| print_error(message)),
            None => print_error(message),
        }
    }

    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Collects lines in memory; failures are prefixed with `error: `.
impl Reporter for Vec<String> {
    fn line(&mut self, message: &str) {
        self.push(message.to_string());
    }

    fn failure(&mut self, message: &str) {
        self.push(format!("error: {}", message));
    }
}
