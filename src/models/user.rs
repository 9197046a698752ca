// ABOUTME: Per-user fitness record - weight history, goals, and workout journal
// ABOUTME: UserFitnessRecord and WeightEntry definitions with registration constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

use crate::models::workout::WorkoutDay;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One body-weight measurement.
///
/// Entries are appended in chronological order and never reordered: the first
/// entry is the user's starting weight, the last is their current weight. At
/// most one entry exists per calendar date; a later write for the same date
/// overwrites in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    /// Calendar date label (long form, or ISO for registration-era entries)
    pub date: String,
    /// Body weight in pounds
    pub weight: f64,
}

/// The complete persisted fitness record for one user.
///
/// Owned and persisted by the serving layer; the scoring path reads it as an
/// immutable snapshot, the journal write path mutates it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFitnessRecord {
    /// Stable record identifier
    pub id: Uuid,
    /// Display name, unique across users
    pub user_name: String,
    /// Self-reported current weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Goal weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Chronological body-weight history
    pub weight_history: Vec<WeightEntry>,
    /// Workout journal, one entry per calendar date
    pub workouts: Vec<WorkoutDay>,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserFitnessRecord {
    /// Create an empty record for a newly registered user
    pub fn new(user_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            current_weight: None,
            target_weight: None,
            weight_history: Vec::new(),
            workouts: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Create a record seeded with a starting weight.
    ///
    /// Registration records the first weight-history entry with an ISO date
    /// label rather than the long form used by the journal write path.
    pub fn with_starting_weight(
        user_name: impl Into<String>,
        starting_weight: f64,
        target_weight: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut record = Self::new(user_name, created_at);
        record.current_weight = Some(starting_weight);
        record.target_weight = target_weight;
        record.weight_history.push(WeightEntry {
            date: created_at.date_naive().format("%Y-%m-%d").to_string(),
            weight: starting_weight,
        });
        record
    }

    /// Whether this user appears on the leaderboard (both weight fields set)
    #[must_use]
    pub const fn is_ranked(&self) -> bool {
        self.current_weight.is_some() && self.target_weight.is_some()
    }

    /// Find the workout for a given date label
    #[must_use]
    pub fn find_workout(&self, date_label: &str) -> Option<&WorkoutDay> {
        self.workouts.iter().find(|w| w.date == date_label)
    }

    /// Mutable lookup of the workout for a given date label
    pub fn find_workout_mut(&mut self, date_label: &str) -> Option<&mut WorkoutDay> {
        self.workouts.iter_mut().find(|w| w.date == date_label)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_record_is_not_ranked() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let record = UserFitnessRecord::new("alex", now);
        assert!(!record.is_ranked());
        assert!(record.weight_history.is_empty());
    }

    #[test]
    fn test_starting_weight_seeds_iso_dated_history() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let record = UserFitnessRecord::with_starting_weight("alex", 185.0, Some(170.0), now);
        assert!(record.is_ranked());
        assert_eq!(record.weight_history.len(), 1);
        assert_eq!(record.weight_history[0].date, "2026-03-02");
        assert!((record.weight_history[0].weight - 185.0).abs() < f64::EPSILON);
    }
}
