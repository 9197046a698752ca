// ABOUTME: Per-user progress metric derivation and cross-user leaderboard ranking
// ABOUTME: Pure, stateless scoring over one user's fitness record snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Progress and leaderboard scoring.
//!
//! [`derive_user_metrics`] is a total function over one user's record: it must
//! not fail for any structurally valid input, including empty workout and
//! weight histories. [`leaderboard`] applies it across all eligible users
//! (those with both weight fields set) and assigns dense 1-based ranks by
//! descending combined score, first-seen order winning ties.
//!
//! `now` is an explicit parameter so every derivation is deterministic; the
//! scorer keeps no state between invocations.

use crate::models::UserFitnessRecord;
use crate::scoring::streak;
use chrono::{DateTime, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight of goal progress in the combined leaderboard score
pub const PROGRESS_WEIGHT: f64 = 0.6;
/// Weight of workout completion rate in the combined leaderboard score
pub const COMPLETION_WEIGHT: f64 = 0.4;

/// Derived progress metrics for one user, in front-end field order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Display name
    pub user_name: String,
    /// Current weight resolved from history (falls back to the profile field)
    pub current_weight: f64,
    /// Goal weight in pounds
    pub target_weight: f64,
    /// Absolute distance from current weight to target, in pounds
    pub weight_difference: f64,
    /// Whether the user is above target (working to lose)
    pub is_losing_weight: bool,
    /// Percentage of the needed weight change achieved, clamped to [0, 100]
    pub progress_to_goal: f64,
    /// Lifetime workout count
    pub total_workouts: u64,
    /// Lifetime completed sets (summed per-day rollups)
    pub total_sets_completed: u64,
    /// Lifetime planned sets (summed per-day rollups)
    pub total_sets_planned: u64,
    /// Completed sets as a percentage of planned, 0 when nothing planned
    pub workout_completion_rate: f64,
    /// Whole days since registration
    pub days_since_joining: i64,
    /// Workouts per week since joining (first partial week counts as one)
    pub average_workouts_per_week: f64,
    /// Date label of the most recent workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<String>,
    /// Title of the most recent workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_title: Option<String>,
    /// Completed-set rollup of the most recent workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_sets_completed: Option<u64>,
    /// Whole days since the most recent workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last_workout: Option<i64>,
    /// Difference between the last two weight-history entries, in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_change_from_last_workout: Option<f64>,
    /// Consecutive-day workout streak (1-day grace window)
    pub current_streak: u32,
    /// First weight ever recorded (falls back to the profile field)
    pub starting_weight: f64,
    /// Signed weight change from starting to current, in pounds
    pub actual_weight_change: f64,
    /// `progress_to_goal * 0.6 + workout_completion_rate * 0.4`
    pub combined_score: f64,
    /// Dense 1-based leaderboard position; 0 until assigned by [`leaderboard`]
    #[serde(default)]
    pub rank: usize,
}

/// Derive the full metric set for one user.
///
/// Returns `None` for users ineligible for ranking (missing either weight
/// field); eligibility is the caller's boundary contract, not an error.
#[must_use]
pub fn derive_user_metrics(
    record: &UserFitnessRecord,
    now: DateTime<Utc>,
) -> Option<LeaderboardEntry> {
    let profile_current = record.current_weight?;
    let target_weight = record.target_weight?;
    let today = now.date_naive();

    // Weight history is chronological: first entry is the starting weight,
    // last is the current one. An empty history falls back to the profile.
    let current_weight = record
        .weight_history
        .last()
        .map_or(profile_current, |e| e.weight);
    let starting_weight = record
        .weight_history
        .first()
        .map_or(profile_current, |e| e.weight);

    let weight_difference = current_weight - target_weight;
    let is_losing_weight = weight_difference > 0.0;
    let actual_weight_change = current_weight - starting_weight;
    let progress_to_goal = progress_to_goal(starting_weight, current_weight, target_weight);

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
    let workout_completion_rate = if total_sets_planned > 0 {
        total_sets_completed as f64 / total_sets_planned as f64 * 100.0
    } else {
        0.0
    };

    let days_since_joining = (now - record.created_at).num_days();
    let weeks_since_joining = (days_since_joining / 7).max(1);
    let average_workouts_per_week = total_workouts as f64 / weeks_since_joining as f64;

    // Workouts with unparseable date labels stay in the lifetime totals above
    // but cannot participate in recency or streak arithmetic.
    let mut dated: Vec<(NaiveDate, &crate::models::WorkoutDay)> = record
        .workouts
        .iter()
        .filter_map(|w| w.parsed_date().map(|d| (d, w)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let last = dated.first();
    let last_workout_date = last.map(|(_, w)| w.date.clone());
    let last_workout_title = last.map(|(_, w)| w.title.clone());
    let last_workout_sets_completed = last.map(|(_, w)| u64::from(w.total_sets_completed));
    let days_since_last_workout = last.map(|(date, _)| (today - *date).num_days());

    let weight_change_from_last_workout = if record.weight_history.len() >= 2 {
        let recent = record.weight_history[record.weight_history.len() - 1].weight;
        let previous = record.weight_history[record.weight_history.len() - 2].weight;
        Some(recent - previous)
    } else {
        None
    };

    let dates_desc: Vec<NaiveDate> = dated.iter().map(|(date, _)| *date).collect();
    let current_streak = streak::current_streak(&dates_desc, today);

    let combined_score =
        progress_to_goal * PROGRESS_WEIGHT + workout_completion_rate * COMPLETION_WEIGHT;

    debug!(
        user = %record.user_name,
        progress_to_goal,
        workout_completion_rate,
        combined_score,
        current_streak,
        "derived user metrics"
    );

    Some(LeaderboardEntry {
        user_name: record.user_name.clone(),
        current_weight,
        target_weight,
        weight_difference: weight_difference.abs(),
        is_losing_weight,
        progress_to_goal,
        total_workouts,
        total_sets_completed,
        total_sets_planned,
        workout_completion_rate,
        days_since_joining,
        average_workouts_per_week,
        last_workout_date,
        last_workout_title,
        last_workout_sets_completed,
        days_since_last_workout,
        weight_change_from_last_workout,
        current_streak,
        starting_weight,
        actual_weight_change,
        combined_score,
        rank: 0,
    })
}

/// Rank all eligible users by descending combined score.
///
/// The sort is stable, so users with identical scores keep their input order
/// and still receive distinct sequential ranks (dense 1-based, no tie
/// sharing).
#[must_use]
pub fn leaderboard(records: &[UserFitnessRecord], now: DateTime<Utc>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = records
        .par_iter()
        .filter_map(|record| derive_user_metrics(record, now))
        .collect();

    entries.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    entries
}

/// Percentage of the needed weight change achieved, clamped to [0, 100].
///
/// Expressed as the fraction of the starting-to-target journey covered,
/// sign-corrected for direction: losing and gaining goals both report 50%
/// at the halfway point. A user already at goal (zero change needed) is at
/// 100%. Overshooting the goal clamps to 100 rather than reporting excess;
/// extending this to an explicit goal-exceeded state is a deliberate
/// non-change until product confirms the intent.
fn progress_to_goal(starting_weight: f64, current_weight: f64, target_weight: f64) -> f64 {
    let total_change_needed = starting_weight - target_weight;
    if total_change_needed.abs() < f64::EPSILON {
        return 100.0;
    }
    let actual_change = current_weight - starting_weight;
    (actual_change / (target_weight - starting_weight) * 100.0).clamp(0.0, 100.0)
}
