// ABOUTME: Weight goal descriptor as stored by the day store
// ABOUTME: Keeps the target date as raw text so malformed dates degrade instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A user-defined weight goal
///
/// `target_date` holds the text the user entered (`YYYY-MM-DD`). It is parsed
/// on every analytics request; if it does not parse, projections report
/// insufficient data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDescriptor {
    /// Target body weight in kilograms
    pub target_weight: f64,
    /// Target date as entered by the user
    pub target_date: String,
    /// Body weight when the goal was set
    pub start_weight: f64,
    /// Inactive goals are ignored by the analytics
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl GoalDescriptor {
    /// Create an active goal
    #[must_use]
    pub fn new(target_weight: f64, target_date: impl Into<String>, start_weight: f64) -> Self {
        Self {
            target_weight,
            target_date: target_date.into(),
            start_weight,
            active: true,
        }
    }

    /// Target weight if it is usable (finite and positive)
    #[must_use]
    pub fn usable_target_weight(&self) -> Option<f64> {
        (self.target_weight.is_finite() && self.target_weight > 0.0).then_some(self.target_weight)
    }
}
