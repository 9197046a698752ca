// ABOUTME: Demo data seeder - generates synthetic users and prints the ranked leaderboard
// ABOUTME: Drives the journal write path end to end with seeded, reproducible data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Demo data seeder for the liftlog engine.
//!
//! Generates a cohort of synthetic users with plausible weight trajectories
//! and workout adherence, drives every journal operation against them, then
//! prints the ranked leaderboard as JSON.
//!
//! Usage:
//! ```bash
//! # Seed with default settings (8 users, 45 days of history)
//! cargo run --bin seed-demo-data
//!
//! # Larger cohort with a fixed seed
//! cargo run --bin seed-demo-data -- --users 20 --seed 7
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use liftlog::journal::{self, SetUpdate};
use liftlog::logging::{init_logging, LoggingConfig};
use liftlog::models::UserFitnessRecord;
use liftlog::scoring::leaderboard;
use liftlog::templates::WorkoutTemplates;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Name pool for synthetic users
const DEMO_NAMES: &[&str] = &[
    "alex", "jordan", "sam", "casey", "riley", "morgan", "taylor", "quinn", "avery", "rowan",
    "dakota", "emerson", "finley", "harper", "kai", "logan", "marley", "nico", "parker", "sage",
];

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Liftlog demo data seeder",
    long_about = "Generate synthetic users with workout history and print the ranked leaderboard"
)]
struct SeedArgs {
    /// Number of synthetic users to generate (capped at the name pool)
    #[arg(long, default_value = "8")]
    users: usize,

    /// Days of workout history to generate per user
    #[arg(long, default_value = "45")]
    days: i64,

    /// RNG seed for reproducible output
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    init_logging(&logging)?;

    let templates = WorkoutTemplates::builtin()?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let now = Utc::now();
    let today = now.date_naive();

    let count = args.users.min(DEMO_NAMES.len());
    let mut records = Vec::with_capacity(count);
    for name in &DEMO_NAMES[..count] {
        let record = seed_user(name, args.days, today, &templates, &mut rng)?;
        records.push(record);
    }
    info!(users = records.len(), days = args.days, "seeded demo cohort");

    let ranked = leaderboard(&records, now);
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

/// Generate one user's full history: registration, daily workouts with partial
/// set completion, and periodic body-weight entries trending toward the goal.
fn seed_user(
    name: &str,
    days: i64,
    today: NaiveDate,
    templates: &WorkoutTemplates,
    rng: &mut StdRng,
) -> Result<UserFitnessRecord> {
    let starting_weight = f64::from(rng.gen_range(140..230));
    // Two thirds of the cohort cuts, the rest bulks.
    let target_weight = if rng.gen_bool(0.66) {
        starting_weight - f64::from(rng.gen_range(5..30))
    } else {
        starting_weight + f64::from(rng.gen_range(5..20))
    };
    let created_at = Utc::now() - Duration::days(days);

    let mut record = UserFitnessRecord::with_starting_weight(
        name,
        starting_weight,
        Some(target_weight),
        created_at,
    );

    // How reliably this user shows up and finishes sets.
    let adherence = rng.gen_range(0.45..0.95);
    let set_completion = rng.gen_range(0.6..1.0);
    // How far along the weight journey they actually got.
    let journey_fraction = rng.gen_range(0.1..1.1);

    for offset in (0..=days).rev() {
        let Some(date) = today.checked_sub_days(chrono::Days::new(offset as u64)) else {
            continue;
        };
        if !rng.gen_bool(adherence) {
            continue;
        }

        let workout = journal::ensure_daily_workout(&mut record, date, templates)?;
        let planned: Vec<(String, Vec<u32>)> = workout
            .exercises
            .iter()
            .map(|e| (e.name.clone(), e.sets.iter().map(|s| s.set_number).collect()))
            .collect();

        for (exercise, set_numbers) in planned {
            for set_number in set_numbers {
                if !rng.gen_bool(set_completion) {
                    continue;
                }
                let update = SetUpdate {
                    reps: None,
                    weight: Some(f64::from(rng.gen_range(9..45) * 5)),
                    completed: Some(true),
                };
                journal::update_set(&mut record, &workout_label(date), &exercise, set_number, update)?;
            }
        }

        // Weigh-ins roughly twice a week, drifting toward the target.
        if rng.gen_bool(0.3) {
            let elapsed = (days - offset) as f64 / days.max(1) as f64;
            let drift = (target_weight - starting_weight) * journey_fraction * elapsed;
            let noise = rng.gen_range(-1.5..1.5);
            let weight = (starting_weight + drift + noise).max(80.0);
            journal::record_body_weight(&mut record, date, (weight * 10.0).round() / 10.0)?;
        }
    }

    Ok(record)
}

fn workout_label(date: NaiveDate) -> String {
    liftlog::dates::format_date_label(date)
}
