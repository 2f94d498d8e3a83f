// ABOUTME: Time-series utilities for weight analytics
// ABOUTME: Floored day distances, bounded nearest-prior-sample lookup, and locale-tolerant parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time-series utilities
//!
//! Parsing functions return `None` for bad input. Callers treat `None` as
//! "no update" and keep whatever value they had before.

use chrono::Days;
use goalpace_core::models::{CalendarDate, WeightObservation, WeightSeries, CALENDAR_DATE_FORMAT};

/// Whole days from `from` to `to`, floored at 1
///
/// Never returns zero or a negative number, so it is always safe as a divisor
/// in rate calculations. Same-day and reversed pairs yield 1.
#[must_use]
pub fn day_distance(from: CalendarDate, to: CalendarDate) -> i64 {
    (to - from).num_days().max(1)
}

/// Find the sample on `target`, or the closest one up to `max_lookback_days` before it
///
/// Each probe is a binary search, so the cost is bounded by the lookback
/// window rather than the length of the series.
#[must_use]
pub fn nearest_prior_sample(
    series: &WeightSeries,
    target: CalendarDate,
    max_lookback_days: i64,
) -> Option<&WeightObservation> {
    let lookback = u64::try_from(max_lookback_days).unwrap_or(0);
    (0..=lookback).find_map(|offset| {
        target
            .checked_sub_days(Days::new(offset))
            .and_then(|date| series.get(date))
    })
}

/// Parse a decimal number written with either a comma or a period
///
/// `"62,5"` and `"62.5"` both parse to `62.5`. Unparseable or non-finite
/// input yields `None`.
#[must_use]
pub fn parse_locale_decimal(text: &str) -> Option<f64> {
    text.trim()
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a body weight entry; only strictly positive values are accepted
#[must_use]
pub fn parse_weight_input(text: &str) -> Option<f64> {
    parse_locale_decimal(text).filter(|weight| *weight > 0.0)
}

/// Parse a `YYYY-MM-DD` calendar date
#[must_use]
pub fn parse_calendar_date(text: &str) -> Option<CalendarDate> {
    CalendarDate::parse_from_str(text.trim(), CALENDAR_DATE_FORMAT).ok()
}
