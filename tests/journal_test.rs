// ABOUTME: Integration tests for the journal write path
// ABOUTME: Covers workout generation, set updates with rollups, and weight entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{days_ago, fixed_today, record};
use liftlog::dates::format_date_label;
use liftlog::journal::{
    ensure_daily_workout, record_body_weight, set_weight_goals, update_set, SetUpdate,
};
use liftlog::models::DayOfWeek;
use liftlog::templates::WorkoutTemplates;
use liftlog::ErrorCode;

fn complete(completed: bool) -> SetUpdate {
    SetUpdate {
        completed: Some(completed),
        ..SetUpdate::default()
    }
}

#[test]
fn test_generates_daily_workout_from_weekday_template() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today(); // Tuesday, March 10, 2026

    let workout = ensure_daily_workout(&mut user, today, &templates).unwrap();
    assert_eq!(workout.day_of_week, DayOfWeek::Tuesday);
    assert_eq!(workout.title, "Pull Day - Back & Biceps");
    assert_eq!(workout.total_sets_completed, 0);
    assert_eq!(workout.total_sets_planned, workout.planned_sets());
    assert!(workout.total_sets_planned > 0);
}

#[test]
fn test_ensure_daily_workout_is_idempotent_per_date() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();

    ensure_daily_workout(&mut user, today, &templates).unwrap();
    update_set(
        &mut user,
        &format_date_label(today),
        "Deadlift",
        1,
        complete(true),
    )
    .unwrap();

    // A second call must return the existing entry, edits intact.
    let again = ensure_daily_workout(&mut user, today, &templates).unwrap();
    assert_eq!(again.total_sets_completed, 1);
    assert_eq!(user.workouts.len(), 1);
}

#[test]
fn test_every_weekday_has_a_template() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    for offset in 0..7 {
        ensure_daily_workout(&mut user, days_ago(offset), &templates).unwrap();
    }
    assert_eq!(user.workouts.len(), 7);
}

#[test]
fn test_update_set_maintains_rollups_at_write_boundary() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();
    let label = format_date_label(today);

    update_set(&mut user, &label, "Deadlift", 1, complete(true)).unwrap();
    update_set(&mut user, &label, "Pull-Up", 2, complete(true)).unwrap();

    let workout = user.find_workout(&label).unwrap();
    assert_eq!(workout.total_sets_completed, 2);
    assert!(!workout.completed);

    // Un-completing brings the rollup back down.
    update_set(&mut user, &label, "Pull-Up", 2, complete(false)).unwrap();
    assert_eq!(user.find_workout(&label).unwrap().total_sets_completed, 1);
}

#[test]
fn test_completing_every_set_marks_the_day_complete() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();
    let label = format_date_label(today);

    let planned: Vec<(String, Vec<u32>)> = user
        .find_workout(&label)
        .unwrap()
        .exercises
        .iter()
        .map(|e| (e.name.clone(), e.sets.iter().map(|s| s.set_number).collect()))
        .collect();
    for (exercise, sets) in planned {
        for set_number in sets {
            update_set(&mut user, &label, &exercise, set_number, complete(true)).unwrap();
        }
    }

    let workout = user.find_workout(&label).unwrap();
    assert!(workout.completed);
    assert_eq!(workout.total_sets_completed, workout.total_sets_planned);
}

#[test]
fn test_update_set_records_reps_and_load() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();
    let label = format_date_label(today);

    let update = SetUpdate {
        reps: Some(6),
        weight: Some(225.0),
        completed: Some(true),
    };
    update_set(&mut user, &label, "Deadlift", 2, update).unwrap();

    let workout = user.find_workout(&label).unwrap();
    let set = workout
        .exercises
        .iter()
        .find(|e| e.name == "Deadlift")
        .and_then(|e| e.sets.iter().find(|s| s.set_number == 2))
        .unwrap();
    assert_eq!(set.reps, 6);
    assert_eq!(set.weight, Some(225.0));
    assert!(set.completed);
}

#[test]
fn test_update_set_unknown_targets_are_not_found() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();
    let label = format_date_label(today);

    let err = update_set(&mut user, "Monday, March 9, 2026", "Deadlift", 1, complete(true))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = update_set(&mut user, &label, "Bench Press", 1, complete(true)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = update_set(&mut user, &label, "Deadlift", 99, complete(true)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_record_body_weight_updates_workout_profile_and_history() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();

    record_body_weight(&mut user, today, 178.5).unwrap();

    let label = format_date_label(today);
    assert_eq!(user.find_workout(&label).unwrap().body_weight, Some(178.5));
    assert_eq!(user.current_weight, Some(178.5));
    assert_eq!(user.weight_history.len(), 1);
    assert_eq!(user.weight_history[0].date, label);
}

#[test]
fn test_same_date_weigh_in_overwrites_in_place() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();

    record_body_weight(&mut user, today, 178.5).unwrap();
    record_body_weight(&mut user, today, 177.0).unwrap();

    assert_eq!(user.weight_history.len(), 1);
    assert_eq!(user.weight_history[0].weight, 177.0);
}

#[test]
fn test_body_weight_requires_a_workout_and_a_sane_value() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();

    let err = record_body_weight(&mut user, today, 178.5).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    ensure_daily_workout(&mut user, today, &templates).unwrap();
    let err = record_body_weight(&mut user, today, -5.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    let err = record_body_weight(&mut user, today, f64::NAN).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_profile_goal_update_journals_current_weight() {
    let mut user = record("alex", 180.0, 170.0);
    let today = fixed_today();

    set_weight_goals(&mut user, Some(179.0), Some(165.0), today).unwrap();
    assert_eq!(user.current_weight, Some(179.0));
    assert_eq!(user.target_weight, Some(165.0));
    assert_eq!(user.weight_history.len(), 1);
    assert_eq!(user.weight_history[0].date, format_date_label(today));

    // Target-only update leaves the history alone.
    set_weight_goals(&mut user, None, Some(160.0), today).unwrap();
    assert_eq!(user.weight_history.len(), 1);
    assert_eq!(user.target_weight, Some(160.0));
}

#[test]
fn test_registration_seed_then_weigh_in_builds_two_entry_history() {
    let templates = WorkoutTemplates::builtin().unwrap();
    let now = common::fixed_now();
    let mut user = liftlog::models::UserFitnessRecord::with_starting_weight(
        "rowan",
        190.0,
        Some(175.0),
        now - chrono::Duration::days(14),
    );

    let today = fixed_today();
    ensure_daily_workout(&mut user, today, &templates).unwrap();
    record_body_weight(&mut user, today, 186.0).unwrap();

    assert_eq!(user.weight_history.len(), 2);
    let entry = liftlog::scoring::derive_user_metrics(&user, now).unwrap();
    assert_eq!(entry.starting_weight, 190.0);
    assert_eq!(entry.current_weight, 186.0);
    assert_eq!(entry.weight_change_from_last_workout, Some(-4.0));
}
