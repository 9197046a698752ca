// ABOUTME: Shared fixtures for integration tests - record and workout builders
// ABOUTME: Builds UserFitnessRecord snapshots with controlled dates and rollups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use liftlog::dates::format_date_label;
use liftlog::models::{
    DayOfWeek, UserFitnessRecord, WeightEntry, WorkoutDay, WorkoutExercise, WorkoutSet,
};

/// A fixed "now" for deterministic derivations: Tuesday, March 10, 2026, 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

/// Today's date under [`fixed_now`]
pub fn fixed_today() -> NaiveDate {
    fixed_now().date_naive()
}

/// A ranked-eligible record with the given weights and no history
pub fn record(name: &str, current: f64, target: f64) -> UserFitnessRecord {
    let mut r = UserFitnessRecord::new(name, fixed_now() - chrono::Duration::days(30));
    r.current_weight = Some(current);
    r.target_weight = Some(target);
    r
}

/// Append a weight-history entry with a long-form date label
pub fn push_weight(record: &mut UserFitnessRecord, date: NaiveDate, weight: f64) {
    record.weight_history.push(WeightEntry {
        date: format_date_label(date),
        weight,
    });
}

/// A workout day carrying only rollups (the scorer trusts these; raw sets empty)
pub fn rollup_day(date: NaiveDate, completed: u32, planned: u32) -> WorkoutDay {
    WorkoutDay {
        date: format_date_label(date),
        day_of_week: DayOfWeek::from(chrono::Datelike::weekday(&date)),
        title: "Test Day".into(),
        exercises: Vec::new(),
        completed: planned > 0 && completed == planned,
        total_sets_completed: completed,
        total_sets_planned: planned,
        workout_duration: None,
        notes: None,
        body_weight: None,
    }
}

/// A workout day built from raw sets; rollups recomputed from them
pub fn exercise_day(date: NaiveDate, exercises: &[(&str, &[bool])]) -> WorkoutDay {
    let mut day = WorkoutDay {
        date: format_date_label(date),
        day_of_week: DayOfWeek::from(chrono::Datelike::weekday(&date)),
        title: "Test Day".into(),
        exercises: exercises
            .iter()
            .map(|(name, sets)| WorkoutExercise {
                name: (*name).to_owned(),
                sets: sets
                    .iter()
                    .enumerate()
                    .map(|(i, &done)| WorkoutSet {
                        set_number: i as u32 + 1,
                        reps: 8,
                        weight: None,
                        completed: done,
                    })
                    .collect(),
            })
            .collect(),
        completed: false,
        total_sets_completed: 0,
        total_sets_planned: 0,
        workout_duration: None,
        notes: None,
        body_weight: None,
    };
    day.recompute_rollups();
    day
}

/// Shift `fixed_today` backward by whole days
pub fn days_ago(days: u64) -> NaiveDate {
    fixed_today().checked_sub_days(chrono::Days::new(days)).unwrap()
}
