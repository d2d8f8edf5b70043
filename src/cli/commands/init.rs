use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::seed::seed_demo_data;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use super::report_migrations;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode), the SQLite
/// database with every migration applied, and optionally the demo fixtures.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let seed = matches!(cli.command, Commands::Init { seed: true });

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing gymattend…");
    println!("🗄️  Database   : {}", db_path.display());

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;
    report_migrations(&applied);
    success(format!("Database initialized at {}", db_path.display()));

    if seed {
        let (members, classes) = seed_demo_data(&pool.conn)?;
        success(format!(
            "Loaded {} demo member(s) and {} class(es).",
            members, classes
        ));
    }

    // Audit failure does not undo a successful init.
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
