use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, paint};

use super::report_migrations;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let db_path = cfg.database_path();

        // Opened without running migrations so `--migrate` reports them.
        let pool = DbPool::new(&db_path)?;

        if *migrate {
            println!("{}", paint(CYAN, "▶ Running migrations…"));
            let applied = run_pending_migrations(&pool.conn)?;
            report_migrations(&applied);
            println!(
                "{}\n",
                paint(
                    GREEN,
                    format!("✔ Migration completed ({} applied).", applied.len())
                )
            );
        }

        if *info {
            stats::print_db_info(&pool, &db_path)?;
        }

        if *check {
            println!("{}", paint(CYAN, "▶ Running integrity check…"));

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", paint(GREEN, "✔ Integrity check passed."));
            } else {
                println!("{} {}\n", paint(RED, "✘ Integrity check failed:"), integrity);
            }
        }

        if *vacuum {
            println!("{}", paint(CYAN, "▶ Running VACUUM…"));
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}\n", paint(GREEN, "✔ Vacuum completed."));
        }
    }

    Ok(())
}
