//! Read-only views over a ledger snapshot. Everything here borrows the
//! records and keeps their stored order.

use crate::models::visit::VisitRecord;
use chrono::NaiveDate;

/// Visits recorded on `date`. The iterator is `Clone`, so callers can walk
/// the same view more than once.
pub fn visits_on_date(
    records: &[VisitRecord],
    date: NaiveDate,
) -> impl Iterator<Item = &VisitRecord> + Clone {
    records.iter().filter(move |r| r.date == date)
}

/// Members still on-site for `date`.
pub fn open_visits_on_date(
    records: &[VisitRecord],
    date: NaiveDate,
) -> impl Iterator<Item = &VisitRecord> + Clone {
    visits_on_date(records, date).filter(|r| r.is_open())
}

pub fn total_visits(records: &[VisitRecord], date: NaiveDate) -> usize {
    visits_on_date(records, date).count()
}

pub fn current_occupancy(records: &[VisitRecord], date: NaiveDate) -> usize {
    open_visits_on_date(records, date).count()
}

/// Case-insensitive substring match on the member name captured at check-in.
/// A blank term matches everything.
pub fn search_by_member_name<'a>(
    records: impl IntoIterator<Item = &'a VisitRecord>,
    term: &str,
) -> Vec<&'a VisitRecord> {
    let needle = term.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| needle.is_empty() || r.member_name.to_lowercase().contains(&needle))
        .collect()
}
