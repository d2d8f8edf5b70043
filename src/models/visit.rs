use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Closing half of a visit. Time and duration only ever exist together.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Departure {
    pub time: NaiveTime,
    pub duration_minutes: i64,
    pub recorded_by: String,
}

/// One member's presence interval on one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VisitRecord {
    pub id: i64,                       // ⇔ visits.id
    pub member_id: String,             // ⇔ visits.member_id
    pub member_name: String,           // snapshot at check-in
    pub membership_type: String,       // snapshot at check-in
    pub date: NaiveDate,               // ⇔ visits.date (TEXT "YYYY-MM-DD")
    pub check_in_time: NaiveTime,      // ⇔ visits.check_in_time (TEXT "HH:MM")
    pub departure: Option<Departure>,  // ⇔ check_out_time + duration_minutes
    pub class_id: Option<String>,      // ⇔ visits.class_id
    pub class_name: Option<String>,    // snapshot at check-in
    pub checked_in_by: String,         // ⇔ visits.checked_in_by
    pub created_at: String,            // ⇔ visits.created_at (ISO8601)
}

impl VisitRecord {
    pub fn is_open(&self) -> bool {
        self.departure.is_none()
    }

    pub fn check_out_time(&self) -> Option<NaiveTime> {
        self.departure.as_ref().map(|d| d.time)
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        self.departure.as_ref().map(|d| d.duration_minutes)
    }

    /// Check-in instant rebuilt from the visit date and the HH:MM check-in time.
    pub fn check_in_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.check_in_time)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn check_in_str(&self) -> String {
        self.check_in_time.format("%H:%M").to_string()
    }

    pub fn check_out_str(&self) -> String {
        self.check_out_time()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

/// Validated input for a check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInRequest {
    pub member_id: String,
    pub date: NaiveDate,
    pub class_id: Option<String>,
    pub class_name: Option<String>,
}

impl CheckInRequest {
    pub fn new(member_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            member_id: member_id.into(),
            date,
            class_id: None,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Build a request from raw form/CLI strings.
    /// Missing date falls back to `today`; blank optional fields count as absent.
    pub fn parse(
        member_id: &str,
        date_raw: Option<&str>,
        class_id: Option<&str>,
        class_name: Option<&str>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let date = match date_raw {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => today,
        };

        let req = Self {
            member_id: member_id.trim().to_string(),
            date,
            class_id: non_blank(class_id),
            class_name: non_blank(class_name),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.member_id.trim().is_empty() {
            return Err(AppError::Validation("member id must not be empty".into()));
        }
        if matches!(&self.class_id, Some(id) if id.trim().is_empty()) {
            return Err(AppError::Validation("class id must not be blank".into()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
