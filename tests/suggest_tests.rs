//! Direct tests of the second-exit suggestion solver.

use worktime::core::calculator::suggest::suggest_exit2;
use worktime::core::policy::WorkPolicy;
use worktime::models::day_record::DayRecord;
use worktime::models::time_of_day::TimeOfDay;

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn open_afternoon(entry1: &str, exit1: &str, entry2: &str) -> DayRecord {
    DayRecord {
        entry1: Some(t(entry1)),
        exit1: Some(t(exit1)),
        entry2: Some(t(entry2)),
        ..Default::default()
    }
}

#[test]
fn balanced_week_suggests_even_day() {
    let policy = WorkPolicy::default();
    let rec = open_afternoon("08:00", "12:00", "13:00");
    // firstSlot 240, lunch exactly 60, needed 240 -> 17:00.
    assert_eq!(suggest_exit2(&rec, 0, &policy), Some(t("17:00")));
}

#[test]
fn prior_surplus_pulls_exit_earlier() {
    let policy = WorkPolicy::default();
    let rec = open_afternoon("08:00", "12:00", "13:00");
    assert_eq!(suggest_exit2(&rec, 30, &policy), Some(t("16:30")));
}

#[test]
fn prior_deficit_pushes_exit_later() {
    let policy = WorkPolicy::default();
    let rec = open_afternoon("08:00", "12:00", "13:00");
    assert_eq!(suggest_exit2(&rec, -30, &policy), Some(t("17:30")));
}

#[test]
fn suggestion_never_before_the_floor() {
    let policy = WorkPolicy::default();
    let rec = open_afternoon("08:00", "12:00", "13:00");
    // A huge surplus would solve to mid-afternoon; the floor wins.
    assert_eq!(suggest_exit2(&rec, 240, &policy), Some(t("16:30")));
}

#[test]
fn suggestion_capped_at_window_end() {
    let mut policy = WorkPolicy::default();
    policy.window_end = t("18:00");
    let rec = open_afternoon("08:00", "12:00", "14:00");
    // needed 240 -> 18:00 exactly; a deficit would push past the window
    // but the ceiling holds.
    assert_eq!(suggest_exit2(&rec, -120, &policy), Some(t("18:00")));
}

#[test]
fn short_lunch_charge_is_anticipated() {
    let policy = WorkPolicy::default();
    // Break is only 30': the solver adds the 30' charge upfront.
    let rec = open_afternoon("08:00", "12:00", "12:30");
    // needed = 480 - 240 + 30 = 270 -> 12:30 + 270' = 17:00.
    assert_eq!(suggest_exit2(&rec, 0, &policy), Some(t("17:00")));
}

#[test]
fn permit_shortens_the_afternoon() {
    let policy = WorkPolicy::default();
    let mut rec = open_afternoon("08:00", "12:00", "13:00");
    rec.permit_minutes = 30;
    assert_eq!(suggest_exit2(&rec, 0, &policy), Some(t("16:30")));
}

#[test]
fn result_is_rounded_down_to_five_minutes() {
    let policy = WorkPolicy::default();
    let rec = open_afternoon("08:03", "12:03", "13:03");
    // Solves to 17:03; suggestions never round up.
    assert_eq!(suggest_exit2(&rec, 0, &policy), Some(t("17:00")));
}

#[test]
fn capped_first_entry_feeds_the_solve() {
    let policy = WorkPolicy::default();
    // 07:00 counts from 07:30: slot1 is 270, not 300.
    let rec = open_afternoon("07:00", "12:00", "13:00");
    // needed = 480 - 270 = 210 -> 16:30.
    assert_eq!(suggest_exit2(&rec, 0, &policy), Some(t("16:30")));
}

#[test]
fn incomplete_inputs_give_no_suggestion() {
    let policy = WorkPolicy::default();

    let mut rec = open_afternoon("08:00", "12:00", "13:00");
    rec.entry2 = None;
    assert_eq!(suggest_exit2(&rec, 0, &policy), None);

    let mut rec = open_afternoon("08:00", "12:00", "13:00");
    rec.exit2 = Some(t("17:00"));
    assert_eq!(suggest_exit2(&rec, 0, &policy), None);

    let mut rec = DayRecord::default();
    rec.smartworking = true;
    assert_eq!(suggest_exit2(&rec, 0, &policy), None);
}
