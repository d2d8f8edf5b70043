use crate::core::calculator::stay::stay_minutes;
use crate::core::clock::Clock;
use crate::db::log::ttlog;
use crate::db::queries::{close_visit, find_open_visit, load_visit};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::visit::{Departure, VisitRecord};
use crate::utils::time::truncate_to_minute;
use chrono::NaiveDate;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Business logic for closing a visit.
pub struct CheckOutLogic;

impl CheckOutLogic {
    /// Close visit `record_id`.
    ///
    /// A check-out earlier than the check-in instant (clock skew, or a visit
    /// filed under a future date) is rejected with `ClockSkew`; the record
    /// stays open.
    pub fn apply(
        conn: &Connection,
        clock: &dyn Clock,
        session: &Session,
        record_id: i64,
    ) -> AppResult<VisitRecord> {
        session.require_attendance("check members out")?;

        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

        let mut visit = load_visit(&tx, record_id)?.ok_or(AppError::RecordNotFound(record_id))?;
        if !visit.is_open() {
            return Err(AppError::AlreadyCheckedOut(record_id));
        }

        let now = clock.now();
        let check_in = visit.check_in_instant();
        let duration_minutes = stay_minutes(check_in, now).ok_or(AppError::ClockSkew {
            record_id,
            check_in,
            now,
        })?;

        let departure = Departure {
            time: truncate_to_minute(now.time()),
            duration_minutes,
            recorded_by: session.operator.clone(),
        };

        if close_visit(&tx, record_id, &departure)? == 0 {
            return Err(AppError::AlreadyCheckedOut(record_id));
        }

        ttlog(
            &tx,
            "checkout",
            &format!("visit {}", record_id),
            &format!(
                "{} ({}) checked out at {} after {} min",
                visit.member_name,
                visit.member_id,
                departure.time.format("%H:%M"),
                duration_minutes
            ),
        )?;

        tx.commit()?;
        visit.departure = Some(departure);
        Ok(visit)
    }

    /// Close the open visit of `member_id` on `date`.
    pub fn apply_for_member(
        conn: &Connection,
        clock: &dyn Clock,
        session: &Session,
        member_id: &str,
        date: NaiveDate,
    ) -> AppResult<VisitRecord> {
        let open = find_open_visit(conn, member_id, &date)?.ok_or_else(|| {
            AppError::NotCheckedIn {
                member_id: member_id.to_string(),
                date,
            }
        })?;
        Self::apply(conn, clock, session, open.id)
    }
}
