// ABOUTME: Canonical weekly workout plan - immutable weekday-to-template mapping
// ABOUTME: Loads the embedded template catalog and instantiates WorkoutDay entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Weekly workout templates.
//!
//! The product ships one canonical workout per weekday. The catalog is static
//! configuration embedded at build time and modeled as an immutable mapping;
//! nothing in the engine mutates it after load.

use crate::dates;
use crate::errors::{AppError, AppResult};
use crate::models::{DayOfWeek, WorkoutDay, WorkoutExercise, WorkoutSet};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded template catalog, one entry per weekday
const BUILTIN_TEMPLATES: &str = include_str!("../data/workout_templates.json");

/// One prescribed set within a template exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Prescribed repetitions
    pub reps: u32,
    /// Always false in the catalog; kept for document-shape compatibility
    pub completed: bool,
}

/// One exercise within a daily template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    /// Exercise name
    pub name: String,
    /// Number of prescribed sets
    pub sets: u32,
    /// Display label for the rep scheme, e.g. `"8"` or `"12 per leg"`
    pub reps: String,
    /// Prescribed sets used to seed a new workout day
    pub default_sets: Vec<TemplateSet>,
}

/// The full plan for one weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    /// Workout title, e.g. `"Push Day - Chest, Shoulders & Triceps"`
    pub title: String,
    /// Ordered exercises
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    /// Total prescribed sets across all exercises
    #[must_use]
    pub fn planned_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.default_sets.len() as u32).sum()
    }
}

/// Immutable weekday-to-template catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct WorkoutTemplates {
    by_day: HashMap<DayOfWeek, WorkoutTemplate>,
}

impl WorkoutTemplates {
    /// Load the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the embedded JSON fails to parse, which
    /// indicates a packaging defect rather than a runtime condition.
    pub fn builtin() -> AppResult<Self> {
        serde_json::from_str(BUILTIN_TEMPLATES)
            .map_err(|e| AppError::config_invalid(format!("workout template catalog: {e}")))
    }

    /// Template for the given weekday, if the catalog defines one
    #[must_use]
    pub fn for_day(&self, day: DayOfWeek) -> Option<&WorkoutTemplate> {
        self.by_day.get(&day)
    }

    /// Instantiate a fresh journal entry for `date` from that weekday's template.
    ///
    /// All sets start uncompleted with the prescribed rep counts; rollups are
    /// seeded accordingly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the catalog has no template for the weekday.
    pub fn instantiate(&self, date: NaiveDate) -> AppResult<WorkoutDay> {
        let day_of_week = DayOfWeek::from(date.weekday());
        let template = self.for_day(day_of_week).ok_or_else(|| {
            AppError::config_missing(format!("no workout template for {}", day_of_week.name()))
        })?;

        let exercises: Vec<WorkoutExercise> = template
            .exercises
            .iter()
            .map(|exercise| WorkoutExercise {
                name: exercise.name.clone(),
                sets: exercise
                    .default_sets
                    .iter()
                    .map(|set| WorkoutSet {
                        set_number: set.set_number,
                        reps: set.reps,
                        weight: None,
                        completed: false,
                    })
                    .collect(),
            })
            .collect();

        Ok(WorkoutDay {
            date: dates::format_date_label(date),
            day_of_week,
            title: template.title.clone(),
            exercises,
            completed: false,
            total_sets_completed: 0,
            total_sets_planned: template.planned_sets(),
            workout_duration: None,
            notes: None,
            body_weight: None,
        })
    }
}
