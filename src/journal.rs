// ABOUTME: Journal write path - daily workout generation, set updates, weight entries
// ABOUTME: Mutates UserFitnessRecord in place and maintains rollups at the write boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Journal mutations.
//!
//! Every operation here mutates one user's record in place and keeps two
//! invariants the store does not enforce:
//!
//! - at most one [`WorkoutDay`](crate::models::WorkoutDay) per calendar date,
//!   and at most one weight-history entry per calendar date (same-date writes
//!   overwrite in place);
//! - the per-day rollups (`total_sets_completed`, `total_sets_planned`,
//!   `completed`) are recomputed from the raw sets on every set mutation, so
//!   the scoring read path can trust them without re-walking the set arrays.

use crate::dates;
use crate::errors::{AppError, AppResult};
use crate::models::{UserFitnessRecord, WeightEntry, WorkoutDay};
use crate::templates::WorkoutTemplates;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

/// Partial update applied to one set
#[derive(Debug, Clone, Copy, Default)]
pub struct SetUpdate {
    /// New rep count, if changing
    pub reps: Option<u32>,
    /// New load in pounds, if changing
    pub weight: Option<f64>,
    /// New completion state, if changing
    pub completed: Option<bool>,
}

/// Return the workout for `date`, creating it from the weekday's template if absent.
///
/// Idempotent per date: repeated calls for the same date return the existing
/// entry, which is how the duplicate-date invariant is upheld.
///
/// # Errors
///
/// Returns `ConfigMissing` if the catalog has no template for the weekday.
pub fn ensure_daily_workout<'a>(
    record: &'a mut UserFitnessRecord,
    date: NaiveDate,
    templates: &WorkoutTemplates,
) -> AppResult<&'a WorkoutDay> {
    let label = dates::format_date_label(date);

    // Positional lookup instead of find() to sidestep the borrow extending
    // across the insertion below.
    let existing = record.workouts.iter().position(|w| w.date == label);
    let index = match existing {
        Some(index) => index,
        None => {
            let day = templates.instantiate(date)?;
            info!(user = %record.user_name, date = %label, title = %day.title, "generated daily workout");
            record.workouts.push(day);
            record.updated_at = Utc::now();
            record.workouts.len() - 1
        }
    };
    Ok(&record.workouts[index])
}

/// Apply a partial update to one set and refresh the day's rollups.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the date, exercise, or set does not exist.
pub fn update_set(
    record: &mut UserFitnessRecord,
    date_label: &str,
    exercise_name: &str,
    set_number: u32,
    update: SetUpdate,
) -> AppResult<()> {
    let user = record.user_name.clone();
    let workout = record
        .find_workout_mut(date_label)
        .ok_or_else(|| AppError::not_found(format!("workout for {date_label}")))?;

    let exercise = workout
        .exercises
        .iter_mut()
        .find(|e| e.name == exercise_name)
        .ok_or_else(|| AppError::not_found(format!("exercise {exercise_name}")))?;

    let set = exercise
        .sets
        .iter_mut()
        .find(|s| s.set_number == set_number)
        .ok_or_else(|| {
            AppError::not_found(format!("set {set_number} of {exercise_name}"))
        })?;

    if let Some(reps) = update.reps {
        set.reps = reps;
    }
    if let Some(weight) = update.weight {
        set.weight = Some(weight);
    }
    if let Some(completed) = update.completed {
        set.completed = completed;
    }

    workout.recompute_rollups();
    debug!(
        user = %user,
        date = %date_label,
        exercise = %exercise_name,
        set = set_number,
        completed_sets = workout.total_sets_completed,
        "set updated"
    );
    record.updated_at = Utc::now();
    Ok(())
}

/// Record a body-weight measurement against the day's workout.
///
/// Updates the workout's `body_weight`, the user's `current_weight`, and the
/// weight history (overwriting any existing entry for the same date).
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-finite or negative weight, and
/// `ResourceNotFound` if no workout exists for the date.
pub fn record_body_weight(
    record: &mut UserFitnessRecord,
    date: NaiveDate,
    weight: f64,
) -> AppResult<()> {
    validate_weight(weight)?;
    let label = dates::format_date_label(date);

    let workout = record
        .find_workout_mut(&label)
        .ok_or_else(|| AppError::not_found(format!("workout for {label}")))?;
    workout.body_weight = Some(weight);

    record.current_weight = Some(weight);
    upsert_weight_entry(record, &label, weight);
    record.updated_at = Utc::now();
    info!(user = %record.user_name, date = %label, weight, "body weight recorded");
    Ok(())
}

/// Update the user's weight goals from the profile surface.
///
/// A new `current` weight is also journaled into the weight history under
/// today's date label, matching the profile-update behavior the front end
/// depends on.
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-finite or negative weight.
pub fn set_weight_goals(
    record: &mut UserFitnessRecord,
    current: Option<f64>,
    target: Option<f64>,
    today: NaiveDate,
) -> AppResult<()> {
    if let Some(weight) = current {
        validate_weight(weight)?;
        record.current_weight = Some(weight);
        let label = dates::format_date_label(today);
        upsert_weight_entry(record, &label, weight);
    }
    if let Some(weight) = target {
        validate_weight(weight)?;
        record.target_weight = Some(weight);
    }
    record.updated_at = Utc::now();
    Ok(())
}

fn validate_weight(weight: f64) -> AppResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(AppError::out_of_range(format!(
            "body weight must be a non-negative number, got {weight}"
        )));
    }
    Ok(())
}

/// At most one history entry per calendar date: overwrite in place when the
/// label already exists, append otherwise.
fn upsert_weight_entry(record: &mut UserFitnessRecord, label: &str, weight: f64) {
    if let Some(entry) = record.weight_history.iter_mut().find(|e| e.date == label) {
        entry.weight = weight;
    } else {
        record.weight_history.push(WeightEntry {
            date: label.to_owned(),
            weight,
        });
    }
}
