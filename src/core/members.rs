//! Admin-only edits of the member directory and class catalog, audited in
//! the same transaction as the change.

use crate::db::catalog::{SqliteCatalog, SqliteDirectory};
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::gym_class::{GymClass, NewGymClass};
use crate::models::member::{Member, MemberStatus, NewMember, required};
use crate::models::session::Session;
use rusqlite::{Connection, Transaction, TransactionBehavior};

pub struct DirectoryLogic;

impl DirectoryLogic {
    pub fn add_member(conn: &Connection, session: &Session, new: &NewMember) -> AppResult<Member> {
        session.require_directory_admin("register members")?;

        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        let member = SqliteDirectory::new(&tx).add(new)?;
        ttlog(
            &tx,
            "member_add",
            &member.id,
            &format!("{} ({}) registered by {}", member.name, member.membership_type, session.operator),
        )?;
        tx.commit()?;

        Ok(member)
    }

    pub fn set_member_status(
        conn: &Connection,
        session: &Session,
        id: &str,
        status: MemberStatus,
    ) -> AppResult<()> {
        session.require_directory_admin("change member status")?;

        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        SqliteDirectory::new(&tx).set_status(id, status)?;
        ttlog(
            &tx,
            "member_status",
            id,
            &format!("status set to {} by {}", status.to_db_str(), session.operator),
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Rename a member. Visits already recorded keep the name they were
    /// checked in with.
    pub fn rename_member(
        conn: &Connection,
        session: &Session,
        id: &str,
        name: &str,
    ) -> AppResult<()> {
        session.require_directory_admin("rename members")?;
        let name = required("member name", name)?;

        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        SqliteDirectory::new(&tx).rename(id, &name)?;
        ttlog(
            &tx,
            "member_rename",
            id,
            &format!("renamed to {} by {}", name, session.operator),
        )?;
        tx.commit()?;

        Ok(())
    }

    pub fn add_class(conn: &Connection, session: &Session, new: &NewGymClass) -> AppResult<GymClass> {
        session.require_directory_admin("edit the class catalog")?;

        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        let class = SqliteCatalog::new(&tx).add(new)?;
        ttlog(
            &tx,
            "class_add",
            &class.id,
            &format!("{} (max {}) added by {}", class.name, class.max_capacity, session.operator),
        )?;
        tx.commit()?;

        Ok(class)
    }
}
