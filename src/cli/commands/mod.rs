pub mod checkin;
pub mod checkout;
pub mod class;
pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod member;
pub mod stats;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::migrate::AppliedMigration;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured database and bring its schema up to date.
/// Migrations run silently here so `--json` output stays parseable.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(cfg.database_path())?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn resolve_date(raw: &Option<String>) -> AppResult<NaiveDate> {
    date::parse_date_or_today(raw.as_deref()).map_err(AppError::InvalidDate)
}

pub(crate) fn report_migrations(applied: &[AppliedMigration]) {
    for (version, message) in applied {
        success(format!("Migration applied: {} → {}", version, message));
    }
}
