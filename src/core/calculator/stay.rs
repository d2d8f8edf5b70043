use crate::models::visit::VisitRecord;
use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveDateTime};

use super::visits::visits_on_date;

/// Length of a stay in whole minutes, half-up rounded.
/// `None` when `now` is earlier than the check-in instant.
pub fn stay_minutes(check_in: NaiveDateTime, now: NaiveDateTime) -> Option<i64> {
    if now < check_in {
        return None;
    }
    Some(minutes_between(check_in, now))
}

/// Mean duration of the closed visits on `date`, half-up rounded to a whole
/// minute. Open visits are ignored; no closed visits gives 0.
pub fn average_stay_minutes(records: &[VisitRecord], date: NaiveDate) -> i64 {
    let (sum, n) = visits_on_date(records, date)
        .filter_map(VisitRecord::duration_minutes)
        .fold((0i64, 0i64), |(sum, n), d| (sum + d, n + 1));

    if n == 0 {
        return 0;
    }

    (2 * sum + n).div_euclid(2 * n)
}
