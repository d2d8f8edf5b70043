#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use gymattend::core::directory::{InMemoryCatalog, InMemoryDirectory};
use gymattend::db::initialize::init_db;
use gymattend::db::pool::DbPool;
use gymattend::models::gym_class::GymClass;
use gymattend::models::member::{Member, MemberStatus};
use gymattend::models::role::Role;
use gymattend::models::session::Session;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch directory so the
/// developer's own config file never leaks into a run.
pub fn gym() -> Command {
    let mut cmd = cargo_bin_cmd!("gymattend");
    cmd.env("HOME", test_home()).env("NO_COLOR", "1");
    cmd
}

/// Scratch HOME shared by the CLI tests.
pub fn test_home() -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push("gymattend_test_home");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymattend.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a test DB with the demo members and classes
pub fn init_seeded_db(db_path: &str) {
    gym()
        .args(["--db", db_path, "--test", "init", "--seed"])
        .assert()
        .success();
}

pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, s).unwrap()
}

pub fn desk() -> Session {
    Session::new("Recepción", Role::Trainer)
}

pub fn member(id: &str, name: &str, kind: &str) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        membership_type: kind.to_string(),
        status: MemberStatus::Active,
    }
}

pub fn directory() -> InMemoryDirectory {
    [
        member("M1", "Juan Pérez González", "Premium"),
        member("M2", "Ana Silva Morales", "Básico"),
        member("M3", "María González", "VIP"),
    ]
    .into_iter()
    .collect()
}

pub fn catalog() -> InMemoryCatalog {
    [
        GymClass {
            id: "C1".to_string(),
            name: "Yoga Matutino".to_string(),
            max_capacity: 15,
        },
        GymClass {
            id: "C2".to_string(),
            name: "Spinning".to_string(),
            max_capacity: 20,
        },
    ]
    .into_iter()
    .collect()
}
