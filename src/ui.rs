//! Diagnostics formatting.
//!
//! Standard output carries exactly one line, the resolved tag, so every
//! message here goes to standard error.

use console::style;

use crate::domain::ResolvedTag;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Report where a resolved tag came from.
pub fn display_resolution(tag: &ResolvedTag) {
    eprintln!(
        "{} Tag '{}' taken from {}",
        style("✓").green(),
        tag.value,
        tag.source
    );
}
