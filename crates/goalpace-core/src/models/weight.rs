// ABOUTME: Weight observation and sorted, de-duplicated weight series
// ABOUTME: Enforces positive finite weights and one observation per calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CalendarDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::slice::Iter;
use tracing::warn;

/// A single weight sample for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightObservation {
    /// Day the weight was recorded
    pub date: CalendarDate,
    /// Body weight in kilograms
    pub weight: f64,
}

impl WeightObservation {
    /// Create a new observation
    #[must_use]
    pub const fn new(date: CalendarDate, weight: f64) -> Self {
        Self { date, weight }
    }

    /// Whether the weight is usable for analytics
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }
}

/// Weight observations sorted ascending by date, unique per day
///
/// Built once per analytics request from the day store. Invalid weights are
/// dropped and, when a day appears twice, the later record wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightSeries {
    observations: Vec<WeightObservation>,
}

impl WeightSeries {
    /// Build a series from observations in any order
    pub fn new(observations: impl IntoIterator<Item = WeightObservation>) -> Self {
        let mut by_date = BTreeMap::new();
        for observation in observations {
            if observation.is_valid() {
                by_date.insert(observation.date, observation.weight);
            } else {
                warn!(
                    date = %observation.date,
                    weight = observation.weight,
                    "Dropping invalid weight observation"
                );
            }
        }

        Self {
            observations: by_date
                .into_iter()
                .map(|(date, weight)| WeightObservation::new(date, weight))
                .collect(),
        }
    }

    /// Observations in ascending date order
    #[must_use]
    pub fn as_slice(&self) -> &[WeightObservation] {
        &self.observations
    }

    /// Number of observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no observations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation
    #[must_use]
    pub fn first(&self) -> Option<&WeightObservation> {
        self.observations.first()
    }

    /// Most recent observation
    #[must_use]
    pub fn latest(&self) -> Option<&WeightObservation> {
        self.observations.last()
    }

    /// Observation recorded on exactly `date`
    #[must_use]
    pub fn get(&self, date: CalendarDate) -> Option<&WeightObservation> {
        self.observations
            .binary_search_by_key(&date, |observation| observation.date)
            .ok()
            .and_then(|index| self.observations.get(index))
    }

    /// The last `count` observations (or all of them if fewer)
    #[must_use]
    pub fn trailing(&self, count: usize) -> &[WeightObservation] {
        let start = self.observations.len().saturating_sub(count);
        &self.observations[start..]
    }

    /// Iterate observations in ascending date order
    pub fn iter(&self) -> Iter<'_, WeightObservation> {
        self.observations.iter()
    }
}

impl FromIterator<WeightObservation> for WeightSeries {
    fn from_iter<I: IntoIterator<Item = WeightObservation>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WeightSeries {
    type Item = &'a WeightObservation;
    type IntoIter = Iter<'a, WeightObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
