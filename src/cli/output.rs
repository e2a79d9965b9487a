//! Shared CLI output helpers for consistent terminal output.
//!
//! Colors go through `console`, which already respects NO_COLOR and
//! non-tty output.

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value plain).
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(format!("{}:", label)).dim(), value);
}
