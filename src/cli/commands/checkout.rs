use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::ledger::AttendanceLedger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::format_stay;

use super::{open_pool, resolve_date};

/// Check a visit out, by record id or by member.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout {
        record,
        member,
        date,
    } = cmd
    {
        let session = cfg.session()?;
        let pool = open_pool(cfg)?;
        let ledger = AttendanceLedger::new(&pool.conn, SystemClock);

        let visit = match (record, member) {
            (Some(id), _) => ledger.check_out(&session, *id)?,
            (None, Some(member_id)) => {
                let d = resolve_date(date)?;
                ledger.check_out_member(&session, member_id.trim(), d)?
            }
            (None, None) => {
                return Err(AppError::Validation(
                    "specify a visit id or --member".into(),
                ));
            }
        };

        success(format!(
            "Checked out {} at {} (in {}, stay {}) [visit #{}]",
            visit.member_name,
            visit.check_out_str(),
            visit.check_in_str(),
            format_stay(visit.duration_minutes()),
            visit.id
        ));
    }

    Ok(())
}
