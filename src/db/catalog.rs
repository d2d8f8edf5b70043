//! SQLite-backed member directory and class catalog.

use crate::core::directory::{ClassCatalog, MemberDirectory};
use crate::errors::{AppError, AppResult};
use crate::models::gym_class::{ClassSnapshot, GymClass, NewGymClass};
use crate::models::member::{Member, MemberSnapshot, MemberStatus, NewMember};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_member(row: &Row) -> rusqlite::Result<Member> {
    let status_str: String = row.get("status")?;
    let status = MemberStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!(
                "Invalid member status: {}",
                status_str
            ))),
        )
    })?;

    Ok(Member {
        id: row.get("id")?,
        name: row.get("name")?,
        membership_type: row.get("membership_type")?,
        status,
    })
}

fn map_class(row: &Row) -> rusqlite::Result<GymClass> {
    Ok(GymClass {
        id: row.get("id")?,
        name: row.get("name")?,
        max_capacity: row.get("max_capacity")?,
    })
}

pub struct SqliteDirectory<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteDirectory<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Member>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, membership_type, status FROM members WHERE id = ?1",
        )?;
        Ok(stmt.query_row([id], map_member).optional()?)
    }

    pub fn add(&self, member: &NewMember) -> AppResult<Member> {
        if self.get(&member.id)?.is_some() {
            return Err(AppError::Validation(format!(
                "member id '{}' is already taken",
                member.id
            )));
        }

        self.conn.execute(
            "INSERT INTO members (id, name, membership_type, status, created_at)
             VALUES (?1, ?2, ?3, 'active', ?4)",
            params![
                member.id,
                member.name,
                member.membership_type,
                Local::now().to_rfc3339(),
            ],
        )?;

        Ok(Member {
            id: member.id.clone(),
            name: member.name.clone(),
            membership_type: member.membership_type.clone(),
            status: MemberStatus::Active,
        })
    }

    pub fn set_status(&self, id: &str, status: MemberStatus) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE members SET status = ?1 WHERE id = ?2",
            params![status.to_db_str(), id],
        )?;
        if changed == 0 {
            return Err(AppError::MemberNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Rename a member. Visits keep the name they were recorded with.
    pub fn rename(&self, id: &str, name: &str) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE members SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        if changed == 0 {
            return Err(AppError::MemberNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn list(&self) -> AppResult<Vec<Member>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, membership_type, status FROM members ORDER BY name ASC",
        )?;
        let rows = stmt.query_map([], map_member)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl MemberDirectory for SqliteDirectory<'_> {
    fn resolve(&self, member_id: &str) -> AppResult<Option<MemberSnapshot>> {
        Ok(self.get(member_id)?.as_ref().map(MemberSnapshot::from))
    }
}

pub struct SqliteCatalog<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteCatalog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, id: &str) -> AppResult<Option<GymClass>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, max_capacity FROM classes WHERE id = ?1")?;
        Ok(stmt.query_row([id], map_class).optional()?)
    }

    pub fn add(&self, class: &NewGymClass) -> AppResult<GymClass> {
        if self.get(&class.id)?.is_some() {
            return Err(AppError::Validation(format!(
                "class id '{}' is already taken",
                class.id
            )));
        }

        self.conn.execute(
            "INSERT INTO classes (id, name, max_capacity, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                class.id,
                class.name,
                class.max_capacity,
                Local::now().to_rfc3339()
            ],
        )?;

        Ok(GymClass {
            id: class.id.clone(),
            name: class.name.clone(),
            max_capacity: class.max_capacity,
        })
    }

    pub fn list(&self) -> AppResult<Vec<GymClass>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, max_capacity FROM classes ORDER BY name ASC")?;
        let rows = stmt.query_map([], map_class)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl ClassCatalog for SqliteCatalog<'_> {
    fn resolve(&self, class_id: &str) -> AppResult<Option<ClassSnapshot>> {
        Ok(self.get(class_id)?.as_ref().map(ClassSnapshot::from))
    }
}
