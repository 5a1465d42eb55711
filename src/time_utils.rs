// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// The twelve Gregorian month names in English. No localization.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format the UTC calendar date of a timestamp as "<MonthName> <DayOfMonth>",
/// e.g. "April 14". No leading zero on the day.
pub fn format_month_day(date: DateTime<Utc>) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.day())
}
