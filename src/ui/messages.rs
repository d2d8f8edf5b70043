//! Console messages for the front desk. Colours are dropped when `NO_COLOR`
//! is set; errors go to stderr.

use crate::utils::colors::colors_enabled;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    if colors_enabled() {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{}{}=== {} ==={}", Level::Info.color(), BOLD, msg, RESET);
    } else {
        println!("=== {} ===", msg);
    }
}
