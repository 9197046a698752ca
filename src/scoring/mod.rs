// ABOUTME: Scoring read path - progress metrics, leaderboard ranking, and statistics
// ABOUTME: Pure, stateless computations over fitness record snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! # Scoring
//!
//! The read side of the engine: pure derivations over record snapshots with
//! no retained state. Every entry point takes `now` explicitly.

/// Per-user metric derivation and cross-user ranking
pub mod leaderboard;
/// Weekly, monthly, and per-exercise dashboard aggregates
pub mod stats;
/// Consecutive-day streak calculation
pub mod streak;

pub use leaderboard::{derive_user_metrics, leaderboard, LeaderboardEntry};
pub use stats::{compute_user_stats, ExerciseBreakdown, MonthlyBucket, UserStats, WeeklyBucket};
pub use streak::current_streak;
