//! The attendance ledger: every visit record of the gym, two transitions
//! (check-in, check-out) and the counters derived from them.
//!
//! The ledger borrows an open connection; records live in the `visits`
//! table, so the "one open visit per member and day" rule holds across
//! processes sharing the database file.

use crate::core::calculator::{occupancy, stay, visits};
use crate::core::checkin::CheckInLogic;
use crate::core::checkout::CheckOutLogic;
use crate::core::clock::Clock;
use crate::core::directory::{ClassCatalog, MemberDirectory};
use crate::core::logic::Core;
use crate::db::queries::{find_open_visit, load_open_visits_by_date, load_visits_by_date};
use crate::errors::AppResult;
use crate::models::day_summary::AttendanceSummary;
use crate::models::session::Session;
use crate::models::visit::{CheckInRequest, VisitRecord};
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct AttendanceLedger<'a, C: Clock> {
    conn: &'a Connection,
    clock: C,
}

impl<'a, C: Clock> AttendanceLedger<'a, C> {
    pub fn new(conn: &'a Connection, clock: C) -> Self {
        Self { conn, clock }
    }

    /// Open a visit for `req.member_id` on `req.date`, stamped with the
    /// current time.
    pub fn check_in(
        &self,
        session: &Session,
        req: &CheckInRequest,
        members: &dyn MemberDirectory,
        classes: &dyn ClassCatalog,
    ) -> AppResult<VisitRecord> {
        CheckInLogic::apply(self.conn, &self.clock, session, req, members, classes)
    }

    /// Close visit `record_id` and record its duration.
    pub fn check_out(&self, session: &Session, record_id: i64) -> AppResult<VisitRecord> {
        CheckOutLogic::apply(self.conn, &self.clock, session, record_id)
    }

    pub fn check_out_member(
        &self,
        session: &Session,
        member_id: &str,
        date: NaiveDate,
    ) -> AppResult<VisitRecord> {
        CheckOutLogic::apply_for_member(self.conn, &self.clock, session, member_id, date)
    }

    pub fn visits_on_date(&self, date: NaiveDate) -> AppResult<Vec<VisitRecord>> {
        load_visits_by_date(self.conn, &date)
    }

    pub fn open_visits_on_date(&self, date: NaiveDate) -> AppResult<Vec<VisitRecord>> {
        load_open_visits_by_date(self.conn, &date)
    }

    pub fn open_visit_for_member(
        &self,
        member_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<VisitRecord>> {
        find_open_visit(self.conn, member_id, &date)
    }

    /// Visits of `date` whose member name contains `term` (case-insensitive).
    pub fn search(&self, date: NaiveDate, term: &str) -> AppResult<Vec<VisitRecord>> {
        let records = self.visits_on_date(date)?;
        Ok(visits::search_by_member_name(&records, term)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn total_visits(&self, date: NaiveDate) -> AppResult<usize> {
        let records = self.visits_on_date(date)?;
        Ok(visits::total_visits(&records, date))
    }

    pub fn current_occupancy(&self, date: NaiveDate) -> AppResult<usize> {
        let records = self.visits_on_date(date)?;
        Ok(visits::current_occupancy(&records, date))
    }

    pub fn average_stay_minutes(&self, date: NaiveDate) -> AppResult<i64> {
        let records = self.visits_on_date(date)?;
        Ok(stay::average_stay_minutes(&records, date))
    }

    pub fn occupancy_percentage(&self, date: NaiveDate, capacity: u32) -> AppResult<i64> {
        let occupied = self.current_occupancy(date)?;
        Ok(occupancy::occupancy_percentage(occupied, capacity))
    }

    pub fn summary(&self, date: NaiveDate, capacity: u32) -> AppResult<AttendanceSummary> {
        let records = self.visits_on_date(date)?;
        Ok(Core::build_summary(&records, date, capacity))
    }
}
