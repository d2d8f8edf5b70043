use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
pub fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate, String> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| raw.to_string()),
        None => Ok(today()),
    }
}
