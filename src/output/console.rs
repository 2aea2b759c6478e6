//! Terminal lines.
//!
//! Per-file progress lines are printed verbatim on stdout. Notices about the
//! run as a whole carry a coloured tag, and errors go to stderr so stdout
//! stays a plain list of actions.

use console::style;

/// Kind of a tagged notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Warning,
    Error,
}

impl Notice {
    fn tag(self) -> String {
        match self {
            Notice::Info => style("INFO").cyan().bold().to_string(),
            Notice::Warning => style("WARN").yellow().bold().to_string(),
            Notice::Error => style("ERROR").red().bold().to_string(),
        }
    }
}

/// Render a notice as `<TAG> <message>`.
pub fn tagged(notice: Notice, message: &str) -> String {
    format!("{} {}", notice.tag(), message)
}

/// Print a progress line exactly as given.
pub fn print_line(message: &str) {
    println!("{}", message);
}

/// Print a notice; errors go to stderr.
pub fn print_notice(notice: Notice, message: &str) {
    match notice {
        Notice::Error => eprintln!("{}", tagged(notice, message)),
        Notice::Info | Notice::Warning => println!("{}", tagged(notice, message)),
    }
}

pub fn print_info(message: &str) {
    print_notice(Notice::Info, message);
}

pub fn print_warning(message: &str) {
    print_notice(Notice::Warning, message);
}

pub fn print_error(message: &str) {
    print_notice(Notice::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_tagged_notices() {
        assert_eq!(
            strip_ansi_codes(&tagged(Notice::Warning, "Dry run")),
            "WARN Dry run"
        );
        assert_eq!(
            strip_ansi_codes(&tagged(Notice::Error, "1 file(s) failed")),
            "ERROR 1 file(s) failed"
        );
    }
}
