use crate::db::migrate::{AppliedMigration, run_pending_migrations};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Index that keeps at most one open visit per member and day.
const OPEN_VISIT_INDEX: &str = "idx_visits_open_member_date";

/// Bring the schema up to date and make sure the open-visit index is in
/// place. Every ledger write relies on it, so a database without it is
/// refused instead of silently accepting duplicate check-ins.
///
/// Returns the migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<AppliedMigration>> {
    let applied = run_pending_migrations(conn)?;

    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name = ?1",
            [OPEN_VISIT_INDEX],
            |row| row.get(0),
        )
        .optional()?;

    if found.is_none() {
        return Err(AppError::Migration(format!(
            "index {} is missing from the visits table",
            OPEN_VISIT_INDEX
        )));
    }

    Ok(applied)
}
