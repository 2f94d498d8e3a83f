// ABOUTME: Read-only snapshot of the day store handed to each analytics request
// ABOUTME: Derives the weight series, daily aggregates and active goal from day entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CalendarDate, DailyAggregate, GoalDescriptor, UserProfile, WeightObservation, WeightSeries};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the store records for one day that the analytics care about
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Body weight in kilograms, if weighed that day
    #[serde(default)]
    pub weight: Option<f64>,
    /// Water units logged
    #[serde(default)]
    pub water: u32,
    /// Sport done that day
    #[serde(default)]
    pub sport: bool,
}

/// Snapshot of the day store
///
/// Keyed by calendar day, so there is at most one entry per date and
/// iteration is in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayStoreSnapshot {
    /// Day entries keyed by date
    #[serde(default)]
    pub days: BTreeMap<CalendarDate, DayEntry>,
    /// Current weight goal, if any
    #[serde(default)]
    pub goal: Option<GoalDescriptor>,
    /// Profile data
    #[serde(default)]
    pub profile: UserProfile,
}

impl DayStoreSnapshot {
    /// Weight observations for every day that has a weight
    #[must_use]
    pub fn weight_series(&self) -> WeightSeries {
        self.days
            .iter()
            .filter_map(|(date, entry)| {
                entry
                    .weight
                    .map(|weight| WeightObservation::new(*date, weight))
            })
            .collect()
    }

    /// Hydration and sport aggregates for every recorded day, ascending by date
    #[must_use]
    pub fn daily_aggregates(&self) -> Vec<DailyAggregate> {
        self.days
            .iter()
            .map(|(date, entry)| DailyAggregate {
                date: *date,
                water: entry.water,
                sport: entry.sport,
            })
            .collect()
    }

    /// The goal, if one exists and is active
    #[must_use]
    pub fn active_goal(&self) -> Option<&GoalDescriptor> {
        self.goal.as_ref().filter(|goal| goal.active)
    }
}
