use crate::errors::{AppError, AppResult};
use crate::models::visit::{Departure, VisitRecord};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const VISIT_COLUMNS: &str = "id, member_id, member_name, membership_type, date, check_in_time, \
     check_out_time, duration_minutes, class_id, class_name, checked_in_by, checked_out_by, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_hhmm(idx: usize, raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(raw.to_string())))
}

pub fn map_visit(row: &Row) -> Result<VisitRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(4, AppError::InvalidDate(date_str.clone())))?;

    let check_in_str: String = row.get("check_in_time")?;
    let check_in_time = parse_hhmm(5, &check_in_str)?;

    let check_out: Option<String> = row.get("check_out_time")?;
    let duration: Option<i64> = row.get("duration_minutes")?;

    // the table CHECK keeps these two columns in lockstep
    let departure = match (check_out, duration) {
        (Some(t), Some(d)) => Some(Departure {
            time: parse_hhmm(6, &t)?,
            duration_minutes: d,
            recorded_by: row
                .get::<_, Option<String>>("checked_out_by")?
                .unwrap_or_default(),
        }),
        (None, None) => None,
        _ => {
            return Err(conversion_error(
                6,
                AppError::Other("check-out time and duration out of sync".into()),
            ));
        }
    };

    Ok(VisitRecord {
        id: row.get("id")?,
        member_id: row.get("member_id")?,
        member_name: row.get("member_name")?,
        membership_type: row.get("membership_type")?,
        date,
        check_in_time,
        departure,
        class_id: row.get("class_id")?,
        class_name: row.get("class_name")?,
        checked_in_by: row.get("checked_in_by")?,
        created_at: row.get("created_at")?,
    })
}

fn collect_visits<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    args: P,
) -> AppResult<Vec<VisitRecord>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_visit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All visits of one date, in insertion order.
pub fn load_visits_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<VisitRecord>> {
    let sql = format!("SELECT {VISIT_COLUMNS} FROM visits WHERE date = ?1 ORDER BY id ASC");
    let date_str = date.format("%Y-%m-%d").to_string();
    collect_visits(conn, &sql, [&date_str])
}

/// Open visits of one date, in insertion order.
pub fn load_open_visits_by_date(
    conn: &Connection,
    date: &NaiveDate,
) -> AppResult<Vec<VisitRecord>> {
    let sql = format!(
        "SELECT {VISIT_COLUMNS} FROM visits
         WHERE date = ?1 AND check_out_time IS NULL
         ORDER BY id ASC"
    );
    let date_str = date.format("%Y-%m-%d").to_string();
    collect_visits(conn, &sql, [&date_str])
}

pub fn load_visit(conn: &Connection, id: i64) -> AppResult<Option<VisitRecord>> {
    let sql = format!("SELECT {VISIT_COLUMNS} FROM visits WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_visit).optional()?)
}

pub fn find_open_visit(
    conn: &Connection,
    member_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<VisitRecord>> {
    let sql = format!(
        "SELECT {VISIT_COLUMNS} FROM visits
         WHERE member_id = ?1 AND date = ?2 AND check_out_time IS NULL"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let date_str = date.format("%Y-%m-%d").to_string();
    Ok(stmt
        .query_row(params![member_id, date_str], map_visit)
        .optional()?)
}

/// Insert a new open visit. The id field of `visit` is ignored; the new rowid is returned.
pub fn insert_visit(conn: &Connection, visit: &VisitRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO visits (member_id, member_name, membership_type, date, check_in_time,
                             class_id, class_name, checked_in_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            visit.member_id,
            visit.member_name,
            visit.membership_type,
            visit.date_str(),
            visit.check_in_str(),
            visit.class_id,
            visit.class_name,
            visit.checked_in_by,
            visit.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close an open visit. Returns the number of rows changed: 0 when the
/// visit does not exist or is already closed.
pub fn close_visit(conn: &Connection, id: i64, departure: &Departure) -> Result<usize> {
    conn.execute(
        "UPDATE visits
         SET check_out_time = ?1, duration_minutes = ?2, checked_out_by = ?3
         WHERE id = ?4 AND check_out_time IS NULL",
        params![
            departure.time.format("%H:%M").to_string(),
            departure.duration_minutes,
            departure.recorded_by,
            id,
        ],
    )
}

/// True when `err` is the open-visit unique index rejecting an insert.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
