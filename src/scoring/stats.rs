// ABOUTME: Per-user dashboard statistics - weekly, monthly, and per-exercise aggregates
// ABOUTME: Total function over one user's workout journal, bucketed around a supplied now
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Dashboard statistics for one user.
//!
//! Weekly and monthly buckets trust the stored per-day rollups; the
//! per-exercise breakdown is recomputed from the raw sets, since rollups
//! do not exist at exercise granularity.

use crate::dates;
use crate::models::UserFitnessRecord;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of trailing weeks in the weekly series
const WEEKLY_BUCKETS: u64 = 8;
/// Number of trailing months in the monthly series
const MONTHLY_BUCKETS: u32 = 6;
/// Cap on the per-exercise breakdown
const MAX_EXERCISE_ROWS: usize = 10;

/// One week of workout volume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    /// Display label, `"Week 1"` (oldest) through `"Week 8"` (current)
    pub week: String,
    /// Workouts recorded in the week
    pub workouts: u64,
    /// Completed-set rollups summed over the week
    pub sets_completed: u64,
}

/// One month of workout volume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// Display label, e.g. `"Sep 2025"`
    pub month: String,
    /// Workouts recorded in the month
    pub workouts: u64,
    /// Completed-set rollups summed over the month
    pub sets_completed: u64,
}

/// Lifetime volume and completion for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseBreakdown {
    /// Exercise name
    pub name: String,
    /// Total sets ever logged for the exercise
    pub total_sets: u64,
    /// Completed sets as a percentage of total, 0 when none logged
    pub completion_rate: f64,
}

/// Aggregate statistics for one user's dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Lifetime workout count
    pub total_workouts: u64,
    /// Lifetime completed sets (summed rollups)
    pub total_sets_completed: u64,
    /// Completed sets per workout, 0 when no workouts exist
    pub average_sets_per_workout: f64,
    /// Completed sets as a percentage of planned, 0 when nothing planned
    pub completion_rate: f64,
    /// Trailing 8 weeks of volume, oldest first
    pub weekly_data: Vec<WeeklyBucket>,
    /// Top exercises by lifetime set count, at most 10
    pub exercise_data: Vec<ExerciseBreakdown>,
    /// Trailing 6 months of volume, oldest first
    pub monthly_trends: Vec<MonthlyBucket>,
}

/// Compute the dashboard aggregate for one user.
///
/// Total function: an empty record yields zeroed totals and empty-but-labeled
/// bucket series. Workouts with unparseable date labels contribute to the
/// lifetime totals but fall outside every time bucket.
#[must_use]
pub fn compute_user_stats(record: &UserFitnessRecord, now: DateTime<Utc>) -> UserStats {
    let today = now.date_naive();

    let total_workouts = record.workouts.len() as u64;
    let total_sets_completed: u64 = record
        .workouts
        .iter()
        .map(|w| u64::from(w.total_sets_completed))
        .sum();
    let total_sets_planned: u64 = record
        .workouts
        .iter()
        .map(|w| u64::from(w.total_sets_planned))
        .sum();

    let average_sets_per_workout = if total_workouts > 0 {
        total_sets_completed as f64 / total_workouts as f64
    } else {
        0.0
    };
    let completion_rate = if total_sets_planned > 0 {
        total_sets_completed as f64 / total_sets_planned as f64 * 100.0
    } else {
        0.0
    };

    // Parse each workout's date once for all bucket passes.
    let dated: Vec<(NaiveDate, u64)> = record
        .workouts
        .iter()
        .filter_map(|w| {
            w.parsed_date()
                .map(|d| (d, u64::from(w.total_sets_completed)))
        })
        .collect();

    let weekly_data = weekly_buckets(&dated, today);
    let monthly_trends = monthly_buckets(&dated, today);
    let exercise_data = exercise_breakdown(record);

    UserStats {
        total_workouts,
        total_sets_completed,
        average_sets_per_workout,
        completion_rate,
        weekly_data,
        exercise_data,
        monthly_trends,
    }
}

/// Trailing weeks anchored on `today`: week k (1-based, oldest first) spans
/// `today - (8-k)*7` through the following six days.
fn weekly_buckets(dated: &[(NaiveDate, u64)], today: NaiveDate) -> Vec<WeeklyBucket> {
    (0..WEEKLY_BUCKETS)
        .rev()
        .filter_map(|weeks_back| {
            let start = today.checked_sub_days(Days::new(weeks_back * 7))?;
            let end = start.checked_add_days(Days::new(6))?;
            let in_week = dated.iter().filter(|(date, _)| *date >= start && *date <= end);
            let (workouts, sets_completed) = in_week
                .fold((0, 0), |(count, sets), (_, completed)| {
                    (count + 1, sets + completed)
                });
            Some(WeeklyBucket {
                week: format!("Week {}", WEEKLY_BUCKETS - weeks_back),
                workouts,
                sets_completed,
            })
        })
        .collect()
}

/// Trailing calendar months anchored on `today`'s month, oldest first.
fn monthly_buckets(dated: &[(NaiveDate, u64)], today: NaiveDate) -> Vec<MonthlyBucket> {
    (0..MONTHLY_BUCKETS)
        .rev()
        .filter_map(|months_back| {
            let start = dates::shift_month_start(today, months_back)?;
            let next = start
                .checked_add_days(Days::new(32))
                .and_then(|d| NaiveDate::from_ymd_opt(d.year(), d.month(), 1))?;
            let in_month = dated.iter().filter(|(date, _)| *date >= start && *date < next);
            let (workouts, sets_completed) = in_month
                .fold((0, 0), |(count, sets), (_, completed)| {
                    (count + 1, sets + completed)
                });
            Some(MonthlyBucket {
                month: dates::format_month_label(start.year(), start.month()),
                workouts,
                sets_completed,
            })
        })
        .collect()
}

/// Per-exercise totals recomputed from the raw sets, first-seen order,
/// then sorted by volume and capped.
fn exercise_breakdown(record: &UserFitnessRecord) -> Vec<ExerciseBreakdown> {
    // Linear scan keyed by name preserves first-seen ordering for ties;
    // exercise counts are small enough that a map buys nothing.
    let mut rows: Vec<(String, u64, u64)> = Vec::new();
    for workout in &record.workouts {
        for exercise in &workout.exercises {
            let completed = exercise.sets.iter().filter(|s| s.completed).count() as u64;
            let total = exercise.sets.len() as u64;
            if let Some(row) = rows.iter_mut().find(|(name, _, _)| *name == exercise.name) {
                row.1 += total;
                row.2 += completed;
            } else {
                rows.push((exercise.name.clone(), total, completed));
            }
        }
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(MAX_EXERCISE_ROWS);
    rows.into_iter()
        .map(|(name, total, completed)| ExerciseBreakdown {
            name,
            total_sets: total,
            completion_rate: if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
