use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, YELLOW, paint};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{} {}",
        paint(CYAN, "• File:"),
        paint(YELLOW, db_path.display())
    );
    println!("{} {:.2} MB", paint(CYAN, "• Size:"), file_mb);

    //
    // 2) COUNTS
    //
    let count = |table: &str| -> rusqlite::Result<i64> {
        pool.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
    };
    let visits = count("visits")?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM visits WHERE check_out_time IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{} {}", paint(CYAN, "• Members:"), paint(GREEN, count("members")?));
    println!("{} {}", paint(CYAN, "• Classes:"), paint(GREEN, count("classes")?));
    println!(
        "{} {} ({} open)",
        paint(CYAN, "• Visits:"),
        paint(GREEN, visits),
        open
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM visits", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM visits", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| paint(GREY, "--"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| paint(GREY, "--"));

    println!("{}", paint(CYAN, "• Date range:"));
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE VISITS/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date) {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let days = (d2 - d1).num_days() + 1;

        let avg = visits as f64 / days as f64;
        println!("{} {:.2}", paint(CYAN, "• Average visits/day:"), avg);
    }

    //
    // 5) SCHEMA
    //
    let migrations = applied_migrations(&pool.conn)?;
    println!(
        "{} {} migration(s), latest {}",
        paint(CYAN, "• Schema:"),
        migrations.len(),
        migrations.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
