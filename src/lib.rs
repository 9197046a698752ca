// ABOUTME: Liftlog engine - fitness journal write path and progress scoring read path
// ABOUTME: Library root wiring models, templates, journal, and scoring modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

#![deny(unsafe_code)]

//! # Liftlog
//!
//! The domain engine behind a mobile fitness tracker: users receive a daily
//! workout generated from a fixed weekly template, record reps, load, and
//! completion per set, track body weight over time, and compare progress on a
//! leaderboard.
//!
//! The crate has two halves:
//!
//! - **Journal write path** ([`journal`], [`templates`]): generates daily
//!   workouts from the canonical weekly plan and applies set/weight mutations,
//!   maintaining per-day rollups and date-uniqueness invariants at the write
//!   boundary.
//! - **Scoring read path** ([`scoring`]): pure, stateless derivations over a
//!   record snapshot - goal progress, completion rate, streaks, weekly and
//!   monthly aggregates, and the combined-score leaderboard ranking.
//!
//! Persistence, authentication, and HTTP surfaces are deliberately out of
//! scope; a serving layer supplies record snapshots and owns durability.
//!
//! ```rust
//! use chrono::Utc;
//! use liftlog::journal;
//! use liftlog::models::UserFitnessRecord;
//! use liftlog::scoring::leaderboard;
//! use liftlog::templates::WorkoutTemplates;
//!
//! # fn main() -> liftlog::AppResult<()> {
//! let templates = WorkoutTemplates::builtin()?;
//! let now = Utc::now();
//!
//! let mut record = UserFitnessRecord::with_starting_weight("alex", 185.0, Some(170.0), now);
//! journal::ensure_daily_workout(&mut record, now.date_naive(), &templates)?;
//!
//! let ranked = leaderboard(&[record], now);
//! assert_eq!(ranked[0].rank, 1);
//! # Ok(())
//! # }
//! ```

/// Calendar date label formatting and parsing
pub mod dates;
/// Unified error handling with standard error codes
pub mod errors;
/// Journal write path: workout generation, set updates, weight entries
pub mod journal;
/// Structured logging setup for binaries and embedders
pub mod logging;
/// Core data models
pub mod models;
/// Scoring read path: metrics, leaderboard, statistics
pub mod scoring;
/// Canonical weekly workout plan
pub mod templates;

pub use errors::{AppError, AppResult, ErrorCode};
