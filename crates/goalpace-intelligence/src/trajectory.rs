// ABOUTME: Planned-vs-actual trajectory projection toward a weight goal
// ABOUTME: Linear interpolation from the first weigh-in to the target, clamped to the goal window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trajectory projection
//!
//! The plan is a straight line from the earliest observation to the target
//! weight on the target date. The projector reports where that line is
//! "now" and how far the latest weight is from it.
#![allow(clippy::cast_precision_loss)] // Safe: day counts are small

use crate::time_series::parse_calendar_date;
use crate::Analysis;
use goalpace_core::constants::units::PERCENT;
use goalpace_core::models::{CalendarDate, GoalDescriptor, WeightObservation, WeightSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Planned weight for today against the latest actual weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryProjection {
    /// Weight the straight-line plan expects today (kg)
    pub planned_today: f64,
    /// Latest observed weight (kg)
    pub actual: f64,
    /// `actual - planned_today`; positive means above plan
    pub delta: f64,
}

/// Stateless projector for planned-vs-actual comparisons
pub struct TrajectoryProjector;

impl TrajectoryProjector {
    /// Project the plan for `now` from a series and the active goal
    ///
    /// Reports `InsufficientData` when there is no observation, no goal, an
    /// unusable target weight, an unparseable target date, or a target date
    /// that is not after the first observation.
    #[must_use]
    pub fn project(
        series: &WeightSeries,
        goal: Option<&GoalDescriptor>,
        now: CalendarDate,
    ) -> Analysis<TrajectoryProjection> {
        let (Some(start), Some(latest)) = (series.first(), series.latest()) else {
            debug!("No weight observations; trajectory unavailable");
            return Analysis::InsufficientData;
        };
        let Some(goal) = goal else {
            return Analysis::InsufficientData;
        };
        let Some(target_weight) = goal.usable_target_weight() else {
            debug!(target_weight = goal.target_weight, "Unusable target weight");
            return Analysis::InsufficientData;
        };
        let Some(target_date) = parse_calendar_date(&goal.target_date) else {
            debug!(target_date = %goal.target_date, "Unparseable target date");
            return Analysis::InsufficientData;
        };

        Self::planned_weight(start, target_weight, target_date, now)
            .map(|planned_today| TrajectoryProjection {
                planned_today,
                actual: latest.weight,
                delta: latest.weight - planned_today,
            })
            .into()
    }

    /// Weight on the straight line from `start` to the target at `now`
    ///
    /// The elapsed fraction is clamped to `[0, 1]`, so the plan never
    /// extrapolates before the start or past the target date. Returns `None`
    /// when the target date is not after the start date.
    #[must_use]
    pub fn planned_weight(
        start: &WeightObservation,
        target_weight: f64,
        target_date: CalendarDate,
        now: CalendarDate,
    ) -> Option<f64> {
        let total_days = (target_date - start.date).num_days();
        if total_days <= 0 {
            debug!(
                start = %start.date,
                target = %target_date,
                "Target date is not after the start date"
            );
            return None;
        }

        let elapsed_days = (now - start.date).num_days();
        let ratio = (elapsed_days as f64 / total_days as f64).clamp(0.0, 1.0);
        Some((target_weight - start.weight).mul_add(ratio, start.weight))
    }

    /// Share of the start-to-target distance still ahead, in percent
    ///
    /// 100 at the start weight, 0 at (or past) the target. A goal equal to the
    /// start weight divides by one instead of zero.
    #[must_use]
    pub fn remaining_percent(start_weight: f64, actual: f64, target_weight: f64) -> f64 {
        let span = start_weight - target_weight;
        let divisor = if span.abs() < f64::EPSILON { 1.0 } else { span };
        ((actual - target_weight) / divisor * PERCENT).clamp(0.0, PERCENT)
    }
}
