use chrono::NaiveDate;
use serde::Serialize;

/// Dashboard counters for one date, derived from a single snapshot of the ledger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub date: NaiveDate,
    pub total_visits: usize,
    pub current_occupancy: usize,
    pub average_stay_minutes: i64,
    pub capacity: u32,
    pub occupancy_percentage: i64,
}
