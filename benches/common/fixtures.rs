// ABOUTME: Benchmark fixtures generating day store snapshots of a given length
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic day store generation for benchmarks.

use chrono::{Days, NaiveDate};
use goalpace::models::{DayEntry, DayStoreSnapshot, GoalDescriptor, UserProfile};

/// First day of every generated history
#[must_use]
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One month of daily weigh-ins
    Month,
    /// One year of daily weigh-ins
    Year,
    /// Five years of daily weigh-ins
    FiveYears,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::FiveYears => 1825,
        }
    }
}

/// Generate a snapshot with a slowly falling, noisy weight curve
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_snapshot(length: HistoryLength) -> DayStoreSnapshot {
    let start = base_date();
    let days = (0..length.days())
        .filter_map(|index| {
            let date = start.checked_add_days(Days::new(index as u64))?;
            // Skip every fifth day so lookups exercise the tolerance window
            let weight = (index % 5 != 4)
                .then(|| 95.0 - 0.05 * index as f64 + ((index * 7) % 10) as f64 / 20.0);
            Some((
                date,
                DayEntry {
                    weight,
                    water: ((index * 3) % 8) as u32,
                    sport: index % 3 == 0,
                },
            ))
        })
        .collect();

    DayStoreSnapshot {
        days,
        goal: Some(GoalDescriptor::new(70.0, "2030-01-01", 95.0)),
        profile: UserProfile {
            height_cm: Some(180.0),
        },
    }
}
