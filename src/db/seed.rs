//! Demo fixtures for a fresh front desk: a handful of members and the weekly classes.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, Transaction, TransactionBehavior, params};

/// (id, name, membership type, status)
pub const DEMO_MEMBERS: &[(&str, &str, &str, &str)] = &[
    ("1", "Juan Pérez González", "Premium", "active"),
    ("2", "Ana Silva Morales", "Básico", "active"),
    ("3", "Pedro Martínez López", "Premium", "suspended"),
    ("4", "María González", "VIP", "active"),
];

/// (id, name, max capacity)
pub const DEMO_CLASSES: &[(&str, &str, u32)] = &[
    ("1", "Yoga Matutino", 15),
    ("2", "CrossFit Intensivo", 12),
    ("3", "Pilates", 10),
    ("4", "Spinning", 20),
];

/// Insert the demo fixtures, skipping ids that already exist.
/// Returns (members inserted, classes inserted).
pub fn seed_demo_data(conn: &Connection) -> AppResult<(usize, usize)> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let now = Local::now().to_rfc3339();

    let mut members = 0;
    for (id, name, kind, status) in DEMO_MEMBERS {
        members += tx.execute(
            "INSERT OR IGNORE INTO members (id, name, membership_type, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, kind, status, now],
        )?;
    }

    let mut classes = 0;
    for (id, name, capacity) in DEMO_CLASSES {
        classes += tx.execute(
            "INSERT OR IGNORE INTO classes (id, name, max_capacity, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, name, capacity, now],
        )?;
    }

    tx.commit()?;
    Ok((members, classes))
}
