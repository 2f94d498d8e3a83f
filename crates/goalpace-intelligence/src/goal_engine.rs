// ABOUTME: Goal analytics engine combining trajectory, pace metrics, body metrics and tips
// ABOUTME: Also validates goal form input into a goal descriptor with "no update" semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal analytics engine
//!
//! One call per screen refresh: the caller hands over a snapshot of the day
//! store and the current date, and gets back every derived value the goal
//! view shows. Nothing is cached; identical input gives identical output.

use crate::advisory::{AdvisoryEngine, Tip};
use crate::body_metrics::BodyMetricsCalculator;
use crate::config::intelligence::IntelligenceConfig;
use crate::pace_estimator::{PaceEstimator, WeightMetrics};
use crate::time_series::{parse_calendar_date, parse_weight_input};
use crate::trajectory::{TrajectoryProjection, TrajectoryProjector};
use crate::Analysis;
use goalpace_core::models::{
    CalendarDate, DayStoreSnapshot, GoalDescriptor, WeightSeries, CALENDAR_DATE_FORMAT,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything derived for the goal view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    /// Day the report was computed for
    pub generated_for: CalendarDate,
    /// Most recent weight, if any
    pub latest_weight: Option<f64>,
    /// Active goal the report was computed against
    pub goal: Option<GoalDescriptor>,
    /// Planned-vs-actual comparison
    pub projection: Analysis<TrajectoryProjection>,
    /// Share of the start-to-target distance still ahead (0-100)
    pub remaining_percent: Option<f64>,
    /// Pace, trend, plateau and ETA
    pub metrics: Analysis<WeightMetrics>,
    /// Body mass index from the latest weight and profile height
    pub bmi: Option<f64>,
    /// Water target for `generated_for` in ml
    pub water_target_ml: u32,
    /// Prioritized tips, never empty
    pub tips: Vec<Tip>,
}

/// Orchestrates the individual analytics for a day store snapshot
pub struct GoalAnalyticsEngine {
    estimator: PaceEstimator,
    advisor: AdvisoryEngine,
    body_metrics: BodyMetricsCalculator,
}

impl Default for GoalAnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalAnalyticsEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            estimator: PaceEstimator::with_config(config.goal_analytics.clone()),
            advisor: AdvisoryEngine::with_config(config.advisory.clone()),
            body_metrics: BodyMetricsCalculator::with_config(config.body_metrics.clone()),
        }
    }

    /// Compute the full report for `now`
    #[must_use]
    pub fn report(&self, snapshot: &DayStoreSnapshot, now: CalendarDate) -> GoalReport {
        let series = snapshot.weight_series();
        let goal = snapshot.active_goal();
        let latest_weight = series.latest().map(|latest| latest.weight);

        let projection = TrajectoryProjector::project(&series, goal, now);
        let remaining_percent = match (projection.as_ref(), series.first(), goal) {
            (Analysis::Computed(projection), Some(start), Some(goal)) => {
                Some(TrajectoryProjector::remaining_percent(
                    start.weight,
                    projection.actual,
                    goal.target_weight,
                ))
            }
            _ => None,
        };

        let target_weight = goal.and_then(GoalDescriptor::usable_target_weight);
        let metrics = self.estimator.metrics(&series, target_weight, now);
        let tips = self
            .advisor
            .advise_for(metrics.as_ref(), &snapshot.daily_aggregates());

        let did_sport_today = snapshot.days.get(&now).is_some_and(|day| day.sport);

        debug!(
            observations = series.len(),
            has_goal = goal.is_some(),
            projection_available = !projection.is_insufficient(),
            metrics_available = !metrics.is_insufficient(),
            tips = tips.len(),
            "Computed goal report"
        );

        GoalReport {
            generated_for: now,
            latest_weight,
            goal: goal.cloned(),
            projection,
            remaining_percent,
            metrics,
            bmi: BodyMetricsCalculator::bmi(latest_weight, snapshot.profile.height_cm),
            water_target_ml: self
                .body_metrics
                .daily_water_target_ml(latest_weight, did_sport_today),
            tips,
        }
    }

    /// Turn goal form text into an active goal
    ///
    /// Returns `None` ("no update") unless the target weight parses to a
    /// positive number and the target date is a valid `YYYY-MM-DD` date. The
    /// start weight is the earliest recorded weight, or the target itself when
    /// nothing has been recorded yet.
    #[must_use]
    pub fn goal_from_input(
        target_weight_text: &str,
        target_date_text: &str,
        series: &WeightSeries,
    ) -> Option<GoalDescriptor> {
        let Some(target_weight) = parse_weight_input(target_weight_text) else {
            debug!(input = target_weight_text, "Ignoring goal with invalid target weight");
            return None;
        };
        let Some(target_date) = parse_calendar_date(target_date_text) else {
            debug!(input = target_date_text, "Ignoring goal with invalid target date");
            return None;
        };

        let start_weight = series
            .first()
            .map_or(target_weight, |observation| observation.weight);

        Some(GoalDescriptor::new(
            target_weight,
            target_date.format(CALENDAR_DATE_FORMAT).to_string(),
            start_weight,
        ))
    }
}
