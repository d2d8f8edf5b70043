use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::ledger::AttendanceLedger;
use crate::errors::AppResult;
use crate::models::day_summary::AttendanceSummary;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, color_for_occupancy, paint};
use crate::utils::format_stay;

use super::{open_pool, resolve_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        date,
        capacity,
        json,
    } = cmd
    {
        let d = resolve_date(date)?;
        let capacity = capacity.unwrap_or(cfg.facility_capacity);

        let pool = open_pool(cfg)?;
        let ledger = AttendanceLedger::new(&pool.conn, SystemClock);
        let summary = ledger.summary(d, capacity)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
    }
    Ok(())
}

fn print_summary(s: &AttendanceSummary) {
    header(format!("Attendance {}", s.date));
    println!("{} {}", paint(CYAN, "• Visits today:"), s.total_visits);
    println!("{} {}", paint(CYAN, "• In the gym now:"), s.current_occupancy);
    println!(
        "{} {}",
        paint(CYAN, "• Average stay:"),
        format_stay(Some(s.average_stay_minutes))
    );
    println!(
        "{} {} of {}",
        paint(CYAN, "• Occupancy:"),
        paint(
            color_for_occupancy(s.occupancy_percentage),
            format!("{}%", s.occupancy_percentage)
        ),
        s.capacity
    );
}
