// ABOUTME: Workout domain models - days, exercises, sets, and weekday handling
// ABOUTME: WorkoutDay, WorkoutExercise, WorkoutSet, and DayOfWeek definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

use crate::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day of the week a workout is scheduled on.
///
/// Serializes to the full en-US day name (`"Monday"`) for compatibility with
/// the stored journal documents and the weekly template keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// Full en-US day name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// One set of one exercise: target reps, optional load, completion flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Repetitions performed (or prescribed, until edited)
    pub reps: u32,
    /// Load in pounds, if the exercise is weighted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Whether the set was completed
    pub completed: bool,
}

/// One exercise within a workout day, with its ordered sets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Exercise name, unique within a day
    pub name: String,
    /// Ordered sets
    pub sets: Vec<WorkoutSet>,
}

/// The full collection of exercises scheduled and performed on one calendar date.
///
/// At most one `WorkoutDay` exists per date label per user; the journal write
/// path guards the uniqueness since the store does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Calendar date label, e.g. `"Monday, September 15, 2025"`
    pub date: String,
    /// Day of week the workout fell on
    pub day_of_week: DayOfWeek,
    /// Template title, e.g. `"Push Day - Chest, Shoulders & Triceps"`
    pub title: String,
    /// Ordered exercises
    pub exercises: Vec<WorkoutExercise>,
    /// Whether every planned set was completed
    pub completed: bool,
    /// Rollup: completed sets across all exercises (maintained on every set write)
    pub total_sets_completed: u32,
    /// Rollup: planned sets across all exercises
    pub total_sets_planned: u32,
    /// Session length in minutes, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_duration: Option<u32>,
    /// Free-form session notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Body weight recorded with this workout, in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<f64>,
}

impl WorkoutDay {
    /// Parse this day's date label. `None` if the label is malformed.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        dates::parse_date_label(&self.date)
    }

    /// Count of sets across all exercises
    #[must_use]
    pub fn planned_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets.len() as u32).sum()
    }

    /// Count of completed sets across all exercises
    #[must_use]
    pub fn completed_sets(&self) -> u32 {
        self.exercises
            .iter()
            .map(|e| e.sets.iter().filter(|s| s.completed).count() as u32)
            .sum()
    }

    /// Recompute the rollup fields from the raw sets.
    ///
    /// Called at the write boundary after every set mutation so readers can
    /// trust the stored rollups without re-walking the set arrays.
    pub fn recompute_rollups(&mut self) {
        self.total_sets_planned = self.planned_sets();
        self.total_sets_completed = self.completed_sets();
        self.completed =
            self.total_sets_planned > 0 && self.total_sets_completed == self.total_sets_planned;
    }
}
