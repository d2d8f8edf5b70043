use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::visits::search_by_member_name;
use crate::core::clock::SystemClock;
use crate::core::ledger::AttendanceLedger;
use crate::errors::AppResult;
use crate::models::visit::VisitRecord;
use crate::utils::colors::colorize_optional;
use crate::utils::format_stay;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

use super::{open_pool, resolve_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date,
        open,
        search,
        json,
    } = cmd
    {
        let d = resolve_date(date)?;
        let pool = open_pool(cfg)?;
        let ledger = AttendanceLedger::new(&pool.conn, SystemClock);

        let records = if *open {
            ledger.open_visits_on_date(d)?
        } else {
            ledger.visits_on_date(d)?
        };

        let visits: Vec<&VisitRecord> = match search {
            Some(term) => search_by_member_name(&records, term),
            None => records.iter().collect(),
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&visits)?);
            return Ok(());
        }

        print_visits(&d, &visits, cfg.separator());
    }
    Ok(())
}

fn print_visits(date: &NaiveDate, visits: &[&VisitRecord], separator: char) {
    if visits.is_empty() {
        println!("No visits for {}", date);
        return;
    }

    println!("📅 Visits for {}:\n", date);

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("MEMBER"),
        Column::new("TYPE"),
        Column::new("IN"),
        Column::new("OUT"),
        Column::new("STAY"),
        Column::new("CLASS"),
    ]);

    for v in visits {
        table.add_row(vec![
            v.id.to_string(),
            v.member_name.clone(),
            v.membership_type.clone(),
            v.check_in_str(),
            colorize_optional(&v.check_out_str()),
            colorize_optional(&format_stay(v.duration_minutes())),
            colorize_optional(v.class_name.as_deref().unwrap_or("-")),
        ]);
    }

    print!("{}", table.render(separator));
}
