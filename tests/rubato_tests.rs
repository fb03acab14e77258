//! Direct tests of the rubato (rounding-loss) calculator.

use worktime::core::calculator::rubato::day_rubato;
use worktime::core::policy::WorkPolicy;
use worktime::models::day_record::DayRecord;
use worktime::models::time_of_day::TimeOfDay;

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

#[test]
fn empty_and_smartworking_days_lose_nothing() {
    let policy = WorkPolicy::default();
    assert_eq!(day_rubato(&DayRecord::default(), &policy), 0);

    let mut sw = DayRecord::default();
    sw.smartworking = true;
    sw.entry1 = Some(t("08:01"));
    assert_eq!(day_rubato(&sw, &policy), 0);
}

#[test]
fn on_grid_stamps_lose_nothing() {
    let policy = WorkPolicy::default();
    let rec = DayRecord {
        entry1: Some(t("07:25")),
        exit1: Some(t("12:20")),
        ..Default::default()
    };
    assert_eq!(day_rubato(&rec, &policy), 0);
}

#[test]
fn entry_rounds_up_exit_rounds_down() {
    let policy = WorkPolicy::default();
    // entry 07:26 -> 4 stolen (up to 07:30); exit 12:23 -> 3 stolen
    // (down to 12:20).
    let rec = DayRecord {
        entry1: Some(t("07:26")),
        exit1: Some(t("12:23")),
        ..Default::default()
    };
    assert_eq!(day_rubato(&rec, &policy), 7);
}

#[test]
fn exit_example_from_badge_readings() {
    let policy = WorkPolicy::default();
    // 07:25 on-grid entry, 12:22 exit loses 2.
    let rec = DayRecord {
        entry1: Some(t("07:25")),
        exit1: Some(t("12:22")),
        ..Default::default()
    };
    assert_eq!(day_rubato(&rec, &policy), 2);
}

#[test]
fn slots_count_only_when_complete() {
    let policy = WorkPolicy::default();
    // Lone entry: no pair, no rubato.
    let rec = DayRecord {
        entry1: Some(t("08:01")),
        ..Default::default()
    };
    assert_eq!(day_rubato(&rec, &policy), 0);

    // Complete morning, dangling afternoon entry: only slot 1 counts.
    let rec = DayRecord {
        entry1: Some(t("08:01")),
        exit1: Some(t("12:04")),
        entry2: Some(t("13:03")),
        ..Default::default()
    };
    assert_eq!(day_rubato(&rec, &policy), 4 + 4);
}

#[test]
fn both_slots_sum_independently() {
    let policy = WorkPolicy::default();
    let rec = DayRecord {
        entry1: Some(t("07:26")),
        exit1: Some(t("12:23")),
        entry2: Some(t("13:10")),
        exit2: Some(t("17:01")),
        ..Default::default()
    };
    // 4 + 3 + 0 + 1
    assert_eq!(day_rubato(&rec, &policy), 8);
}
