// ABOUTME: Core data models for the liftlog engine
// ABOUTME: Re-exports UserFitnessRecord, WorkoutDay, and related journal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! # Data Models
//!
//! Core data structures shared by the journal write path and the scoring
//! read path. All models serialize to the camelCase JSON shape the existing
//! front end consumes.

mod user;
mod workout;

pub use user::{UserFitnessRecord, WeightEntry};
pub use workout::{DayOfWeek, WorkoutDay, WorkoutExercise, WorkoutSet};
