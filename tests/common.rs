// ABOUTME: Shared test utilities and fixtures for goalpace integration tests
// ABOUTME: Provides date helpers, weight series builders and day store snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `goalpace`

use chrono::{Days, NaiveDate};
use goalpace::config::IntelligenceConfig;
use goalpace::models::{
    DayEntry, DayStoreSnapshot, GoalDescriptor, UserProfile, WeightObservation, WeightSeries,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference "day 1" used across scenarios
pub fn day1() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// `day1` plus `offset` days
pub fn day(offset: u64) -> NaiveDate {
    day1().checked_add_days(Days::new(offset)).unwrap()
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Observation `offset` days after `day1`
pub fn obs(offset: u64, weight: f64) -> WeightObservation {
    WeightObservation::new(day(offset), weight)
}

/// Series from `(offset, weight)` pairs
pub fn series(points: &[(u64, f64)]) -> WeightSeries {
    points.iter().map(|&(offset, weight)| obs(offset, weight)).collect()
}

/// Active goal whose target date is `offset` days after `day1`
pub fn goal(target_weight: f64, offset: u64, start_weight: f64) -> GoalDescriptor {
    GoalDescriptor::new(target_weight, day(offset).to_string(), start_weight)
}

/// Default analytics configuration, independent of the environment
pub fn config() -> IntelligenceConfig {
    IntelligenceConfig::default()
}

/// Snapshot with the given weigh-ins and an optional goal
pub fn snapshot_with(points: &[(u64, f64)], goal: Option<GoalDescriptor>) -> DayStoreSnapshot {
    let days = points
        .iter()
        .map(|&(offset, weight)| {
            (
                day(offset),
                DayEntry {
                    weight: Some(weight),
                    ..DayEntry::default()
                },
            )
        })
        .collect();
    DayStoreSnapshot {
        days,
        goal,
        profile: UserProfile::default(),
    }
}

/// Set water and sport for a day, creating the record if needed
pub fn log_day(snapshot: &mut DayStoreSnapshot, offset: u64, water: u32, sport: bool) {
    let entry = snapshot.days.entry(day(offset)).or_default();
    entry.water = water;
    entry.sport = sport;
}

/// Float comparison with an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
