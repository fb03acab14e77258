//! Direct tests of the day-balance calculator.

use worktime::core::calculator::balance::{StampRole, apply_threshold, cap, day_balance, raw_day_diff};
use worktime::core::policy::WorkPolicy;
use worktime::models::day_record::DayRecord;
use worktime::models::time_of_day::TimeOfDay;

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn day(entry1: &str, exit1: &str, entry2: &str, exit2: &str) -> DayRecord {
    let stamp = |s: &str| if s.is_empty() { None } else { Some(t(s)) };
    DayRecord {
        smartworking: false,
        entry1: stamp(entry1),
        exit1: stamp(exit1),
        entry2: stamp(entry2),
        exit2: stamp(exit2),
        permit_minutes: 0,
    }
}

#[test]
fn empty_day_is_neutral() {
    let policy = WorkPolicy::default();
    let rec = DayRecord::default();
    assert_eq!(raw_day_diff(&rec, &policy), 0);
    assert_eq!(day_balance(&rec, &policy), 0);
}

#[test]
fn smartworking_is_neutral_even_with_residual_stamps() {
    let policy = WorkPolicy::default();
    // A blob edited by hand could carry stamps alongside the flag; the
    // calculator must still treat the day as exactly standard.
    let mut rec = day("07:00", "12:00", "13:00", "19:00");
    rec.smartworking = true;
    assert_eq!(day_balance(&rec, &policy), 0);
}

#[test]
fn open_afternoon_defers_the_day() {
    let policy = WorkPolicy::default();
    let rec = day("08:00", "12:00", "13:00", "");
    assert_eq!(day_balance(&rec, &policy), 0);
}

#[test]
fn reference_day_rounds_to_zero() {
    // capped entry1 07:30, slot1 292', slot2 202', short lunch -12',
    // worked 482, raw +2, threshold -> 0.
    let policy = WorkPolicy::default();
    let rec = day("07:25", "12:22", "13:10", "16:32");
    assert_eq!(raw_day_diff(&rec, &policy), 2);
    assert_eq!(day_balance(&rec, &policy), 0);
}

#[test]
fn early_entry_counts_from_window_start() {
    let policy = WorkPolicy::default();
    assert_eq!(cap(t("07:00"), &policy, StampRole::Entry), t("07:30"));
    // Entries after the window close are left alone.
    assert_eq!(cap(t("20:30"), &policy, StampRole::Entry), t("20:30"));
}

#[test]
fn late_exit_counts_up_to_window_end() {
    let policy = WorkPolicy::default();
    assert_eq!(cap(t("20:30"), &policy, StampRole::Exit), t("20:00"));
    // Exits before the window open are left alone.
    assert_eq!(cap(t("07:00"), &policy, StampRole::Exit), t("07:00"));
}

#[test]
fn window_end_is_site_dependent() {
    let mut policy = WorkPolicy::default();
    policy.window_end = t("18:00");
    assert_eq!(cap(t("19:15"), &policy, StampRole::Exit), t("18:00"));
}

#[test]
fn short_lunch_is_charged_on_raw_stamps() {
    let policy = WorkPolicy::default();
    // 8h of stamps but only a 30' break: 30' charged back.
    let rec = day("08:00", "12:00", "12:30", "16:30");
    assert_eq!(raw_day_diff(&rec, &policy), -30);
    assert_eq!(day_balance(&rec, &policy), -30);
}

#[test]
fn permit_counts_as_worked_time() {
    let policy = WorkPolicy::default();
    // Morning only, 4h, plus 4h of permits: exactly standard.
    let mut rec = day("08:00", "12:00", "", "");
    rec.permit_minutes = 240;
    assert_eq!(day_balance(&rec, &policy), 0);
}

#[test]
fn permit_only_day_counts() {
    let policy = WorkPolicy::default();
    let mut rec = DayRecord::default();
    rec.permit_minutes = 30;
    // 30' of permit against an otherwise absent day: a big deficit, not
    // the "nothing entered" neutral case.
    assert_eq!(raw_day_diff(&rec, &policy), 30 - 480);
    assert_eq!(day_balance(&rec, &policy), -450);
}

#[test]
fn threshold_rounds_half_away_from_zero() {
    assert_eq!(apply_threshold(0, 5), 0);
    assert_eq!(apply_threshold(2, 5), 0);
    assert_eq!(apply_threshold(3, 5), 5);
    assert_eq!(apply_threshold(7, 5), 5);
    assert_eq!(apply_threshold(8, 5), 10);
    assert_eq!(apply_threshold(-2, 5), 0);
    assert_eq!(apply_threshold(-3, 5), -5);
    assert_eq!(apply_threshold(-8, 5), -10);
}

#[test]
fn threshold_is_idempotent_and_odd() {
    for x in -650..=650 {
        let once = apply_threshold(x, 5);
        assert_eq!(apply_threshold(once, 5), once, "idempotence at {x}");
        assert_eq!(apply_threshold(-x, 5), -once, "odd symmetry at {x}");
    }
}
