// ABOUTME: Weight goal analytics engine deriving pace, trend, plateau, ETA and tips
// ABOUTME: Pure, synchronous computations over an injected day store snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goalpace Intelligence
//!
//! Analytics for a weight goal: where the user should be today on a straight
//! line from their first weigh-in to the target, how fast their weight is
//! moving, whether it has stalled, when they will arrive at the current pace,
//! and a short list of tips.
//!
//! Every function is pure. Callers pass a snapshot of the day store and the
//! current date; nothing is cached between calls.

/// Analytics configuration
pub mod config;

/// Date arithmetic and defensive parsing of user input
pub mod time_series;

/// Planned-vs-actual projection along a straight line to the goal
pub mod trajectory;

/// Pace, trend, plateau and ETA estimation
pub mod pace_estimator;

/// Prioritized tips derived from metrics and daily aggregates
pub mod advisory;

/// BMI and daily water target
pub mod body_metrics;

/// Goal editing and the combined goal report
pub mod goal_engine;

pub use advisory::{AdvisoryEngine, AdvisoryInputs, Tip, TipKind, TrailingAggregates};
pub use body_metrics::BodyMetricsCalculator;
pub use config::IntelligenceConfig;
pub use goal_engine::{GoalAnalyticsEngine, GoalReport};
pub use pace_estimator::{PaceEstimate, PaceEstimator, PaceMethod, Trend, WeightMetrics};
pub use trajectory::{TrajectoryProjection, TrajectoryProjector};

use serde::{Deserialize, Serialize};

/// Outcome of an analytics computation
///
/// Missing or unusable input is reported as `InsufficientData` rather than as
/// a zero or NaN standing in for "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Analysis<T> {
    /// The computation had enough data
    Computed(T),
    /// Not enough (or no valid) input to compute a result
    InsufficientData,
}

impl<T> Analysis<T> {
    /// The computed value, if any
    #[must_use]
    pub fn computed(self) -> Option<T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::InsufficientData => None,
        }
    }

    /// Borrow the computed value
    #[must_use]
    pub const fn as_ref(&self) -> Analysis<&T> {
        match self {
            Self::Computed(value) => Analysis::Computed(value),
            Self::InsufficientData => Analysis::InsufficientData,
        }
    }

    /// Whether the computation lacked data
    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }

    /// Transform the computed value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Analysis<U> {
        match self {
            Self::Computed(value) => Analysis::Computed(f(value)),
            Self::InsufficientData => Analysis::InsufficientData,
        }
    }
}

impl<T> From<Option<T>> for Analysis<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::InsufficientData, Self::Computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_serializes_with_status_and_value() {
        let computed = serde_json::to_value(Analysis::Computed(1.5)).unwrap();
        assert_eq!(computed, json!({ "status": "computed", "value": 1.5 }));

        let missing = serde_json::to_value(Analysis::<f64>::InsufficientData).unwrap();
        assert_eq!(missing, json!({ "status": "insufficient_data" }));
    }

    #[test]
    fn test_analysis_deserializes_tagged_json() {
        let parsed: Analysis<u32> =
            serde_json::from_value(json!({ "status": "computed", "value": 7 })).unwrap();
        assert_eq!(parsed, Analysis::Computed(7));

        let parsed: Analysis<u32> =
            serde_json::from_value(json!({ "status": "insufficient_data" })).unwrap();
        assert!(parsed.is_insufficient());

        assert!(serde_json::from_value::<Analysis<u32>>(json!({ "status": "maybe" })).is_err());
    }
}
