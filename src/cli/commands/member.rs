use crate::cli::parser::{Commands, MemberAction};
use crate::config::Config;
use crate::core::members::DirectoryLogic;
use crate::db::catalog::SqliteDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::member::{MemberStatus, NewMember};
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

use super::open_pool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Member { action } = cmd else {
        return Ok(());
    };

    let pool = open_pool(cfg)?;

    match action {
        MemberAction::Add {
            id,
            name,
            membership_type,
        } => {
            let new = NewMember::parse(id, name, membership_type)?;
            let member = DirectoryLogic::add_member(&pool.conn, &cfg.session()?, &new)?;
            success(format!(
                "Registered member {} ({}, {}).",
                member.id, member.name, member.membership_type
            ));
        }

        MemberAction::List => {
            let members = SqliteDirectory::new(&pool.conn).list()?;
            if members.is_empty() {
                info("No members registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID"),
                Column::new("NAME"),
                Column::new("TYPE"),
                Column::new("STATUS"),
            ]);
            for m in members {
                table.add_row(vec![
                    m.id,
                    m.name,
                    m.membership_type,
                    m.status.to_db_str().to_string(),
                ]);
            }
            print!("{}", table.render(cfg.separator()));
        }

        MemberAction::Rename { id, name } => {
            DirectoryLogic::rename_member(&pool.conn, &cfg.session()?, id, name)?;
            success(format!("Member {} is now {}.", id, name.trim()));
        }

        MemberAction::Status { id, status } => {
            let parsed = MemberStatus::from_db_str(status).ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown status '{}' (expected active, inactive or suspended)",
                    status
                ))
            })?;
            DirectoryLogic::set_member_status(&pool.conn, &cfg.session()?, id, parsed)?;
            success(format!("Member {} is now {}.", id, parsed.to_db_str()));
        }
    }

    Ok(())
}
