use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::ledger::AttendanceLedger;
use crate::db::catalog::{SqliteCatalog, SqliteDirectory};
use crate::errors::AppResult;
use crate::models::member::MemberStatus;
use crate::models::visit::CheckInRequest;
use crate::ui::messages::{success, warning};
use crate::utils::date;

use super::open_pool;

/// Check a member in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        member,
        date: date_arg,
        class_id,
        class_name,
    } = cmd
    {
        //
        // 1. Validate raw input
        //
        let req = CheckInRequest::parse(
            member,
            date_arg.as_deref(),
            class_id.as_deref(),
            class_name.as_deref(),
            date::today(),
        )?;

        let session = cfg.session()?;
        let pool = open_pool(cfg)?;

        let members = SqliteDirectory::new(&pool.conn);
        let classes = SqliteCatalog::new(&pool.conn);

        //
        // 2. Status is informative only; suspended members still get in
        //
        if let Some(m) = members.get(&req.member_id)?
            && m.status != MemberStatus::Active
        {
            warning(format!(
                "{} is {} in the member directory.",
                m.name,
                m.status.to_db_str()
            ));
        }

        //
        // 3. Open the visit
        //
        let ledger = AttendanceLedger::new(&pool.conn, SystemClock);
        let visit = ledger.check_in(&session, &req, &members, &classes)?;

        let class_part = visit
            .class_name
            .as_ref()
            .map(|c| format!(" for {}", c))
            .unwrap_or_default();

        success(format!(
            "Checked in {} ({}) at {} on {}{} [visit #{}]",
            visit.member_name,
            visit.membership_type,
            visit.check_in_str(),
            visit.date_str(),
            class_part,
            visit.id
        ));
    }

    Ok(())
}
