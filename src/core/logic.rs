use crate::core::calculator::{occupancy, stay, visits};
use crate::models::{day_summary::AttendanceSummary, visit::VisitRecord};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// All dashboard counters for `date`, from one snapshot of records.
    pub fn build_summary(records: &[VisitRecord], date: NaiveDate, capacity: u32) -> AttendanceSummary {
        let total_visits = visits::total_visits(records, date);
        let current_occupancy = visits::current_occupancy(records, date);
        let average_stay_minutes = stay::average_stay_minutes(records, date);
        let occupancy_percentage = occupancy::occupancy_percentage(current_occupancy, capacity);

        AttendanceSummary {
            date,
            total_visits,
            current_occupancy,
            average_stay_minutes,
            capacity,
            occupancy_percentage,
        }
    }
}
