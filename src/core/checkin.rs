use crate::core::clock::Clock;
use crate::core::directory::{ClassCatalog, MemberDirectory};
use crate::db::log::ttlog;
use crate::db::queries::{find_open_visit, insert_visit, is_unique_violation};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::visit::{CheckInRequest, VisitRecord};
use crate::utils::time::truncate_to_minute;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Business logic for opening a visit.
pub struct CheckInLogic;

impl CheckInLogic {
    pub fn apply(
        conn: &Connection,
        clock: &dyn Clock,
        session: &Session,
        req: &CheckInRequest,
        members: &dyn MemberDirectory,
        classes: &dyn ClassCatalog,
    ) -> AppResult<VisitRecord> {
        session.require_attendance("check members in")?;
        req.validate()?;

        // ------------------------------------------------
        // 1️⃣ Snapshot directory data
        // ------------------------------------------------
        let member = members
            .resolve(&req.member_id)?
            .ok_or_else(|| AppError::MemberNotFound(req.member_id.clone()))?;

        let class_name = match &req.class_id {
            Some(class_id) => {
                let class = classes
                    .resolve(class_id)?
                    .ok_or_else(|| AppError::ClassNotFound(class_id.clone()))?;
                Some(req.class_name.clone().unwrap_or(class.name))
            }
            None => req.class_name.clone(),
        };

        // ------------------------------------------------
        // 2️⃣ Write under the database write lock
        // ------------------------------------------------
        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

        if find_open_visit(&tx, &req.member_id, &req.date)?.is_some() {
            return Err(already_checked_in(req));
        }

        let now = clock.now();
        let mut visit = VisitRecord {
            id: 0,
            member_id: req.member_id.clone(),
            member_name: member.name,
            membership_type: member.membership_type,
            date: req.date,
            check_in_time: truncate_to_minute(now.time()),
            departure: None,
            class_id: req.class_id.clone(),
            class_name,
            checked_in_by: session.operator.clone(),
            created_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        };

        // the partial unique index is the last word on concurrent check-ins
        visit.id = insert_visit(&tx, &visit).map_err(|e| {
            if is_unique_violation(&e) {
                already_checked_in(req)
            } else {
                AppError::Db(e)
            }
        })?;

        ttlog(
            &tx,
            "checkin",
            &format!("visit {}", visit.id),
            &format!(
                "{} ({}) checked in at {} on {}",
                visit.member_name,
                visit.member_id,
                visit.check_in_str(),
                visit.date_str()
            ),
        )?;

        tx.commit()?;
        Ok(visit)
    }
}

fn already_checked_in(req: &CheckInRequest) -> AppError {
    AppError::AlreadyCheckedIn {
        member_id: req.member_id.clone(),
        date: req.date,
    }
}
