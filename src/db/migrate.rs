use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior};

/// Ordered schema migrations. Each one runs once, inside its own transaction,
/// and is marked as applied in the `log` table.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_directory",
        "Created members and classes tables",
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            membership_type  TEXT NOT NULL,
            status           TEXT NOT NULL DEFAULT 'active'
                             CHECK(status IN ('active','inactive','suspended')),
            created_at       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS classes (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            max_capacity  INTEGER NOT NULL CHECK(max_capacity > 0),
            created_at    TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250301_0002_create_visits",
        "Created visits table with open-visit uniqueness",
        r#"
        CREATE TABLE IF NOT EXISTS visits (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id        TEXT NOT NULL,
            member_name      TEXT NOT NULL,
            membership_type  TEXT NOT NULL,
            date             TEXT NOT NULL,
            check_in_time    TEXT NOT NULL,
            check_out_time   TEXT,
            duration_minutes INTEGER,
            class_id         TEXT,
            class_name       TEXT,
            checked_in_by    TEXT NOT NULL DEFAULT '',
            created_at       TEXT NOT NULL,
            CHECK ((check_out_time IS NULL) = (duration_minutes IS NULL)),
            CHECK (duration_minutes IS NULL OR duration_minutes >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_visits_date ON visits(date, id);

        -- at most one open visit per member and day
        CREATE UNIQUE INDEX IF NOT EXISTS idx_visits_open_member_date
            ON visits(member_id, date)
            WHERE check_out_time IS NULL;
        "#,
    ),
    (
        "20250412_0003_add_checked_out_by",
        "Added checked_out_by to visits",
        r#"
        ALTER TABLE visits ADD COLUMN checked_out_by TEXT;
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

    tx.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Version and description of a migration applied by this call.
pub type AppliedMigration = (&'static str, &'static str);

/// Public entry point: run all pending migrations.
/// Returns the migrations applied by this call, oldest first. Nothing is
/// printed; reporting is left to the command that asked for it.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<AppliedMigration>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for &(version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, message, sql)?;
        applied.push((version, message));
    }

    Ok(applied)
}
