//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print usage line (no color) to stderr
pub fn usage(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg);
}

/// Print data to stdout verbatim (caller supplies the trailing newline)
pub fn data(text: &str) {
    print!("{}", text);
}
