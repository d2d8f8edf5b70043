/// ANSI color helper utilities for terminal output.
use std::fmt::Display;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colours are off when `NO_COLOR` is set, whatever its value.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Wrap `text` in `color`, or return it bare when colours are off.
pub fn paint<T: Display>(color: &str, text: T) -> String {
    if colors_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Occupancy color:
/// \>= 100% → red
/// \>= 80%  → yellow
/// otherwise → green
pub fn color_for_occupancy(percentage: i64) -> &'static str {
    if percentage >= 100 {
        RED
    } else if percentage >= 80 {
        YELLOW
    } else {
        GREEN
    }
}

/// Grey for placeholder values ("-", "--:--"), reset otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "-" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}
