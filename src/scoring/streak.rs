// ABOUTME: Consecutive-day workout streak calculation
// ABOUTME: Walks date-descending workout dates backward from today with a 1-day grace window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

use chrono::NaiveDate;

/// Count the current consecutive-day workout streak.
///
/// `dates_desc` must be sorted descending (most recent first). The walk keeps
/// a running expected date starting at `today`: each workout whose date is 0
/// or 1 day before the expected date extends the streak and resets the
/// expected date; the first gap larger than one day ends the walk.
///
/// Treating a 0-day difference as streak-continuing means duplicate same-date
/// entries each count once. That conflates duplicates with consecutive-day
/// continuation, but the rest of the system assumes one workout per date and
/// the behavior is load-bearing for existing streak displays, so it is kept.
#[must_use]
pub fn current_streak(dates_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut expected = today;
    for &date in dates_desc {
        let days_diff = (expected - date).num_days();
        if days_diff == 0 || days_diff == 1 {
            streak += 1;
            expected = date;
        } else {
            // A gap ends the streak outright; later matches never resume it.
            break;
        }
    }
    streak
}
