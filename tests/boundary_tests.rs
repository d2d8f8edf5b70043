use chrono::NaiveDate;
use gymattend::errors::AppError;
use gymattend::models::gym_class::NewGymClass;
use gymattend::models::member::{MemberStatus, NewMember};
use gymattend::models::role::Role;
use gymattend::models::session::Session;
use gymattend::models::visit::CheckInRequest;
use gymattend::utils::format_stay;
use gymattend::utils::table::{Column, Table};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

#[test]
fn test_format_stay() {
    assert_eq!(format_stay(Some(105)), "1h 45m");
    assert_eq!(format_stay(Some(45)), "45m");
    assert_eq!(format_stay(Some(120)), "2h 0m");
    assert_eq!(format_stay(Some(0)), "-");
    assert_eq!(format_stay(None), "-");
}

#[test]
fn test_checkin_request_parse() {
    let req = CheckInRequest::parse(" M1 ", None, Some("  "), Some(""), today()).unwrap();
    assert_eq!(req.member_id, "M1");
    assert_eq!(req.date, today());
    assert_eq!(req.class_id, None);
    assert_eq!(req.class_name, None);

    let req = CheckInRequest::parse("M1", Some("2025-01-31"), Some("C1"), None, today()).unwrap();
    assert_eq!(req.date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    assert_eq!(req.class_id.as_deref(), Some("C1"));

    assert!(matches!(
        CheckInRequest::parse("   ", None, None, None, today()),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        CheckInRequest::parse("M1", Some("31/01/2025"), None, None, today()),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_new_member_and_class_validation() {
    let m = NewMember::parse(" 7 ", " Rosa Díaz ", "VIP").unwrap();
    assert_eq!((m.id.as_str(), m.name.as_str()), ("7", "Rosa Díaz"));
    assert!(matches!(
        NewMember::parse("7", "", "VIP"),
        Err(AppError::Validation(_))
    ));

    assert_eq!(NewGymClass::parse("5", "Zumba", None).unwrap().max_capacity, 20);
    assert!(matches!(
        NewGymClass::parse("5", "Zumba", Some(0)),
        Err(AppError::Validation(_))
    ));

    assert_eq!(MemberStatus::from_db_str(" Suspended "), Some(MemberStatus::Suspended));
    assert_eq!(MemberStatus::from_db_str("frozen"), None);
}

#[test]
fn test_session_role_gates() {
    let admin = Session::new("Admin", Role::Admin);
    let trainer = Session::new("Carlos", Role::Trainer);
    let member = Session::new("Juan", Role::Member);

    assert!(admin.require_attendance("check in").is_ok());
    assert!(admin.require_directory_admin("add members").is_ok());

    assert!(trainer.require_attendance("check in").is_ok());
    assert!(matches!(
        trainer.require_directory_admin("add members"),
        Err(AppError::Forbidden { .. })
    ));

    let err = member.require_attendance("check members in").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operator 'Juan (member)' is not allowed to check members in"
    );
}

#[test]
fn test_table_aligns_accented_and_coloured_cells() {
    let mut table = Table::new(vec![Column::new("NAME"), Column::new("OUT")]);
    table.add_row(vec!["María González".to_string(), "\x1b[90m--:--\x1b[0m".to_string()]);
    table.add_row(vec!["Ana".to_string(), "10:15".to_string()]);

    let rendered = table.render('-');
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "NAME           OUT   ");
    assert_eq!(lines[1], "-".repeat(20));
    assert_eq!(lines[3], "Ana            10:15 ");
}
