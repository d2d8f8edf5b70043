//! Property-based tests for the attendance ledger: random sequences of
//! check-ins, check-outs and clock movements against an in-memory database.

use chrono::TimeDelta;
use gymattend::core::calculator::occupancy::occupancy_percentage;
use gymattend::core::clock::ManualClock;
use gymattend::core::ledger::AttendanceLedger;
use gymattend::errors::AppError;
use gymattend::models::visit::CheckInRequest;
use gymattend::utils::time::round_minutes;
use proptest::prelude::*;
use std::collections::HashSet;

mod common;
use common::{at, catalog, day, desk, directory, memory_pool};

#[derive(Debug, Clone)]
enum Step {
    CheckIn(usize),
    CheckOut(usize),
    Wait(i64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..3).prop_map(Step::CheckIn),
        (0usize..3).prop_map(Step::CheckOut),
        (1i64..90).prop_map(Step::Wait),
    ]
}

const MEMBERS: [&str; 3] = ["M1", "M2", "M3"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ledger_invariants_hold(steps in prop::collection::vec(step(), 1..40), capacity in 0u32..6) {
        let pool = memory_pool();
        let clock = ManualClock::new(at(6, 0, 0));
        let ledger = AttendanceLedger::new(&pool.conn, &clock);
        let (dir, cat) = (directory(), catalog());

        for s in steps {
            match s {
                Step::CheckIn(i) => {
                    let was_open = ledger.open_visit_for_member(MEMBERS[i], day()).unwrap().is_some();
                    let res = ledger.check_in(&desk(), &CheckInRequest::new(MEMBERS[i], day()), &dir, &cat);
                    prop_assert_eq!(res.is_err(), was_open);
                    if let Err(e) = res {
                        prop_assert!(matches!(e, AppError::AlreadyCheckedIn { .. }), "unexpected error {e}");
                    }
                }
                Step::CheckOut(i) => {
                    let res = ledger.check_out_member(&desk(), MEMBERS[i], day());
                    match res {
                        Ok(v) => prop_assert!(v.duration_minutes().unwrap_or(-1) >= 0),
                        Err(e) => prop_assert!(matches!(e, AppError::NotCheckedIn { .. }), "unexpected error {e}"),
                    }
                }
                Step::Wait(m) => clock.advance(TimeDelta::minutes(m)),
            }

            let visits = ledger.visits_on_date(day()).unwrap();

            // at most one open visit per member
            let mut open_members = HashSet::new();
            for v in visits.iter().filter(|v| v.is_open()) {
                prop_assert!(open_members.insert(v.member_id.clone()));
            }

            let summary = ledger.summary(day(), capacity).unwrap();
            prop_assert_eq!(summary.total_visits, visits.len());
            prop_assert_eq!(summary.current_occupancy, open_members.len());
            prop_assert!(summary.current_occupancy <= summary.total_visits);
            prop_assert_eq!(
                summary.occupancy_percentage,
                occupancy_percentage(summary.current_occupancy, capacity)
            );

            let durations: Vec<i64> = visits.iter().filter_map(|v| v.duration_minutes()).collect();
            match (durations.iter().min(), durations.iter().max()) {
                (Some(lo), Some(hi)) => {
                    prop_assert!(summary.average_stay_minutes >= *lo);
                    prop_assert!(summary.average_stay_minutes <= *hi);
                }
                _ => prop_assert_eq!(summary.average_stay_minutes, 0),
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_round_minutes_is_nearest(secs in 0i64..1_000_000) {
        let m = round_minutes(TimeDelta::seconds(secs));
        prop_assert!((m * 60 - secs).abs() <= 30);
    }

    #[test]
    fn prop_occupancy_percentage_bounds(occupied in 0usize..500, capacity in 1u32..500) {
        let pct = occupancy_percentage(occupied, capacity);
        let exact = occupied as f64 * 100.0 / capacity as f64;
        prop_assert!((pct as f64 - exact).abs() <= 0.5);
        if occupied as u32 <= capacity {
            prop_assert!(pct <= 100);
        }
    }
}
