use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::env;
use std::fs;

mod common;
use common::{gym, init_seeded_db, setup_test_db, test_home};

const DAY: &str = "2025-03-10";

fn checkin(db_path: &str, member: &str) {
    gym()
        .args(["--db", db_path, "checkin", member, "--date", DAY])
        .assert()
        .success();
}

fn stats_json(db_path: &str, capacity: &str) -> Value {
    let output = gym()
        .args([
            "--db",
            db_path,
            "stats",
            "--date",
            DAY,
            "--capacity",
            capacity,
            "--json",
        ])
        .output()
        .expect("run stats");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stats prints JSON")
}

#[test]
fn test_init_seed_loads_directory() {
    let db_path = setup_test_db("init_seed");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "member", "list"])
        .assert()
        .success()
        .stdout(contains("Juan Pérez González"))
        .stdout(contains("suspended"));

    gym()
        .args(["--db", &db_path, "class", "list"])
        .assert()
        .success()
        .stdout(contains("Yoga Matutino"))
        .stdout(contains("CrossFit Intensivo"));
}

#[test]
fn test_checkin_and_list() {
    let db_path = setup_test_db("checkin_list");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "checkin", "1", "--date", DAY, "--class", "1"])
        .assert()
        .success()
        .stdout(contains("Checked in Juan Pérez González (Premium)"))
        .stdout(contains("for Yoga Matutino"));

    gym()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Juan Pérez González"))
        .stdout(contains("Yoga Matutino"))
        .stdout(contains("--:--"));

    gym()
        .args(["--db", &db_path, "list", "--date", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("No visits for 2025-03-11"));
}

#[test]
fn test_double_checkin_fails() {
    let db_path = setup_test_db("double_checkin");
    init_seeded_db(&db_path);
    checkin(&db_path, "2");

    gym()
        .args(["--db", &db_path, "checkin", "2", "--date", DAY])
        .assert()
        .failure()
        .stderr(contains("already checked in"));

    let stats = stats_json(&db_path, "50");
    assert_eq!(stats["total_visits"], 1);
}

#[test]
fn test_checkin_unknown_member_fails() {
    let db_path = setup_test_db("unknown_member");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "checkin", "99", "--date", DAY])
        .assert()
        .failure()
        .stderr(contains("Member '99' not found"));

    gym()
        .args(["--db", &db_path, "checkin", "1", "--date", DAY, "--class", "42"])
        .assert()
        .failure()
        .stderr(contains("Class '42' not found"));
}

#[test]
fn test_suspended_member_is_warned_but_admitted() {
    let db_path = setup_test_db("suspended_member");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "checkin", "3", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("suspended"))
        .stdout(contains("Checked in Pedro Martínez López"));
}

#[test]
fn test_checkout_by_member_then_again() {
    let db_path = setup_test_db("checkout_member");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");

    gym()
        .args(["--db", &db_path, "checkout", "--member", "1", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Checked out Juan Pérez González"));

    gym()
        .args(["--db", &db_path, "checkout", "--member", "1", "--date", DAY])
        .assert()
        .failure()
        .stderr(contains("No open visit for member '1'"));

    gym()
        .args(["--db", &db_path, "checkout", "1"])
        .assert()
        .failure()
        .stderr(contains("already checked out"));
}

#[test]
fn test_checkout_unknown_record_fails() {
    let db_path = setup_test_db("checkout_unknown");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "checkout", "999"])
        .assert()
        .failure()
        .stderr(contains("Visit record 999 not found"));

    // neither a record id nor --member
    gym()
        .args(["--db", &db_path, "checkout"])
        .assert()
        .failure();
}

#[test]
fn test_stats_json() {
    let db_path = setup_test_db("stats_json");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");
    checkin(&db_path, "2");

    let stats = stats_json(&db_path, "4");
    assert_eq!(stats["date"], DAY);
    assert_eq!(stats["total_visits"], 2);
    assert_eq!(stats["current_occupancy"], 2);
    assert_eq!(stats["average_stay_minutes"], 0);
    assert_eq!(stats["capacity"], 4);
    assert_eq!(stats["occupancy_percentage"], 50);

    gym()
        .args(["--db", &db_path, "checkout", "--member", "2", "--date", DAY])
        .assert()
        .success();

    let stats = stats_json(&db_path, "4");
    assert_eq!(stats["total_visits"], 2);
    assert_eq!(stats["current_occupancy"], 1);
    assert_eq!(stats["occupancy_percentage"], 25);
}

#[test]
fn test_stats_zero_capacity() {
    let db_path = setup_test_db("stats_zero_capacity");
    init_seeded_db(&db_path);
    checkin(&db_path, "4");

    let stats = stats_json(&db_path, "0");
    assert_eq!(stats["current_occupancy"], 1);
    assert_eq!(stats["occupancy_percentage"], 0);
}

#[test]
fn test_stats_text_output() {
    let db_path = setup_test_db("stats_text");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");

    gym()
        .args(["--db", &db_path, "stats", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Visits today:"))
        .stdout(contains("In the gym now:"))
        .stdout(contains("of 50"));
}

#[test]
fn test_list_json_open_and_search() {
    let db_path = setup_test_db("list_json");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");
    checkin(&db_path, "2");
    checkin(&db_path, "4");

    gym()
        .args(["--db", &db_path, "checkout", "--member", "4", "--date", DAY])
        .assert()
        .success();

    let output = gym()
        .args(["--db", &db_path, "list", "--date", DAY, "--open", "--json"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let visits: Value = serde_json::from_slice(&output.stdout).expect("list prints JSON");
    let names: Vec<&str> = visits
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|v| v["member_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Juan Pérez González", "Ana Silva Morales"]);

    gym()
        .args(["--db", &db_path, "list", "--date", DAY, "--search", "GONZÁLEZ"])
        .assert()
        .success()
        .stdout(contains("Juan Pérez González"))
        .stdout(contains("María González"))
        .stdout(contains("Ana Silva Morales").not());
}

#[test]
fn test_invalid_date_fails() {
    let db_path = setup_test_db("invalid_date");
    init_seeded_db(&db_path);

    gym()
        .args(["--db", &db_path, "checkin", "1", "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    gym()
        .args(["--db", &db_path, "list", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_member_and_class_admin() {
    let db_path = setup_test_db("directory_admin");
    init_seeded_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "member", "add", "10", "--name", "Lucía Rojas", "--type", "Básico",
        ])
        .assert()
        .success()
        .stdout(contains("Registered member 10"));

    gym()
        .args([
            "--db", &db_path, "member", "add", "10", "--name", "Otra", "--type", "VIP",
        ])
        .assert()
        .failure()
        .stderr(contains("already taken"));

    gym()
        .args(["--db", &db_path, "member", "status", "10", "inactive"])
        .assert()
        .success()
        .stdout(contains("Member 10 is now inactive"));

    gym()
        .args(["--db", &db_path, "member", "status", "10", "frozen"])
        .assert()
        .failure()
        .stderr(contains("unknown status"));

    gym()
        .args([
            "--db", &db_path, "class", "add", "9", "--name", "Boxeo", "--capacity", "8",
        ])
        .assert()
        .success()
        .stdout(contains("Added class 9 (Boxeo, max 8)"));

    gym()
        .args(["--db", &db_path, "checkin", "10", "--date", DAY, "--class", "9"])
        .assert()
        .success()
        .stdout(contains("for Boxeo"));
}

#[test]
fn test_log_records_transitions() {
    let db_path = setup_test_db("log_print");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");

    gym()
        .args(["--db", &db_path, "checkout", "--member", "1", "--date", DAY])
        .assert()
        .success();

    gym()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("checkin"))
        .stdout(contains("checkout"))
        .stdout(contains("init"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");

    gym()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Members:"))
        .stdout(contains("Visits:"))
        .stdout(contains("Integrity check passed"));

    gym()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("0 applied"));
}

#[test]
fn test_json_output_on_fresh_database_parses() {
    let db_path = setup_test_db("fresh_json");

    let output = gym()
        .args(["--db", &db_path, "--test", "list", "--json", "--date", DAY])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let visits: Value = serde_json::from_str(&stdout).expect("list prints only JSON");
    assert_eq!(visits, Value::Array(vec![]));

    fs::remove_file(&db_path).ok();
    let output = gym()
        .args(["--db", &db_path, "stats", "--json", "--date", DAY])
        .output()
        .expect("run stats");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let stats: Value = serde_json::from_str(&stdout).expect("stats prints only JSON");
    assert_eq!(stats["total_visits"], 0);
}

#[test]
fn test_migrations_are_reported_by_init_and_db_migrate() {
    let db_path = setup_test_db("migrate_report");

    gym()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20250301_0002_create_visits"));

    gym()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not())
        .stdout(contains("0 applied"));
}

#[test]
fn test_relative_db_name_resolves_to_same_file() {
    let name = "relative_override_gymattend.sqlite";
    let resolved = test_home().join(".gymattend").join(name);
    fs::remove_file(&resolved).ok();

    let elsewhere = env::temp_dir();

    gym()
        .current_dir(&elsewhere)
        .args(["--db", name, "--test", "init", "--seed"])
        .assert()
        .success();
    assert!(resolved.exists());

    gym()
        .current_dir(&elsewhere)
        .args(["--db", name, "checkin", "2", "--date", DAY])
        .assert()
        .success();

    gym()
        .args(["--db", name, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Ana Silva Morales"));

    assert!(!elsewhere.join(name).exists());
}

#[test]
fn test_member_rename_keeps_visit_snapshot() {
    let db_path = setup_test_db("member_rename");
    init_seeded_db(&db_path);
    checkin(&db_path, "4");

    gym()
        .args(["--db", &db_path, "member", "rename", "4", "--name", "María G. Ruiz"])
        .assert()
        .success()
        .stdout(contains("Member 4 is now María G. Ruiz"));

    gym()
        .args(["--db", &db_path, "member", "list"])
        .assert()
        .success()
        .stdout(contains("María G. Ruiz"));

    gym()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("María González"));

    gym()
        .args(["--db", &db_path, "member", "rename", "99", "--name", "Nadie"])
        .assert()
        .failure()
        .stderr(contains("Member '99' not found"));

    gym()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("member_rename"));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    let db_path = setup_test_db("no_color");
    init_seeded_db(&db_path);
    checkin(&db_path, "1");

    gym()
        .args(["--db", &db_path, "stats", "--date", DAY, "--capacity", "4"])
        .assert()
        .success()
        .stdout(contains("Visits today: 1"))
        .stdout(contains("Occupancy: 25% of 4"))
        .stdout(contains("\x1b[").not());

    gym()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Members: 4"))
        .stdout(contains("\x1b[").not());

    gym()
        .args(["--db", &db_path, "list", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}
