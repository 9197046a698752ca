// ABOUTME: Calendar date label formatting and parsing for journal entries
// ABOUTME: Handles the en-US long-form labels and ISO fallbacks used across records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog

//! Calendar date labels.
//!
//! Journal entries key on human-readable date labels rather than ISO dates
//! (`"Monday, September 15, 2025"`). Registration-era weight entries use
//! `"2025-09-15"` instead, and some historical rows carry the comma-less long
//! form. The parser accepts all three; formatting always produces the
//! canonical long form.

use chrono::{Datelike, NaiveDate};

/// Accepted label formats, tried in order.
const LABEL_FORMATS: &[&str] = &[
    "%A, %B %d, %Y",
    "%A %B %d, %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
];

/// Format a date as the canonical journal label, e.g. `"Monday, September 15, 2025"`.
#[must_use]
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Format a month label for trend buckets, e.g. `"Sep 2025"`.
#[must_use]
pub fn format_month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(|| format!("{month}/{year}"), |d| d.format("%b %Y").to_string())
}

/// Parse a journal date label.
///
/// Returns `None` for labels that match no accepted format. A label whose
/// weekday prefix disagrees with the rest of the date is salvaged by dropping
/// the prefix.
#[must_use]
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    for format in LABEL_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // Mislabeled weekday prefix: retry with everything after the first comma.
    let (_, rest) = trimmed.split_once(',')?;
    NaiveDate::parse_from_str(rest.trim(), "%B %d, %Y").ok()
}

/// First day of the month `offset` months before (`year`, `month`).
#[must_use]
pub fn shift_month_start(date: NaiveDate, months_back: u32) -> Option<NaiveDate> {
    let total = date.year() * 12 + date.month0() as i32 - months_back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}
