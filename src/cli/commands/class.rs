use crate::cli::parser::{ClassAction, Commands};
use crate::config::Config;
use crate::core::members::DirectoryLogic;
use crate::db::catalog::SqliteCatalog;
use crate::errors::AppResult;
use crate::models::gym_class::NewGymClass;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

use super::open_pool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Class { action } = cmd else {
        return Ok(());
    };

    let pool = open_pool(cfg)?;

    match action {
        ClassAction::Add { id, name, capacity } => {
            let new = NewGymClass::parse(id, name, *capacity)?;
            let class = DirectoryLogic::add_class(&pool.conn, &cfg.session()?, &new)?;
            success(format!(
                "Added class {} ({}, max {}).",
                class.id, class.name, class.max_capacity
            ));
        }

        ClassAction::List => {
            let classes = SqliteCatalog::new(&pool.conn).list()?;
            if classes.is_empty() {
                info("No classes in the catalog.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID"),
                Column::new("NAME"),
                Column::new("CAPACITY"),
            ]);
            for c in classes {
                table.add_row(vec![c.id, c.name, c.max_capacity.to_string()]);
            }
            print!("{}", table.render(cfg.separator()));
        }
    }

    Ok(())
}
