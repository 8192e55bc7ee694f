// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date formatting.

use chrono::NaiveDate;

/// Format a date the way the Fitbit API expects it (`YYYY-MM-DD`).
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
