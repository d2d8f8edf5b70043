//! Formatting utilities used for CLI output.

use regex::Regex;
use std::sync::OnceLock;

/// Stay length as shown at the front desk: `1h 45m`, `45m`, or `-`.
/// Zero and missing durations both render as `-`.
pub fn format_stay(minutes: Option<i64>) -> String {
    match minutes {
        None | Some(0) => "-".to_string(),
        Some(m) => {
            let hours = m / 60;
            let mins = m % 60;
            if hours > 0 {
                format!("{}h {}m", hours, mins)
            } else {
                format!("{}m", mins)
            }
        }
    }
}

pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}
