// ABOUTME: Weight pace, trend, plateau and ETA estimation from a sorted weight series
// ABOUTME: 7-day reference pace with a trailing-entries fallback and direction-guarded ETA
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pace estimator
//!
//! Pace is measured in kg/day against a reference sample roughly one week
//! before the latest weigh-in. When the history around that day is empty the
//! estimator compares the first and last of the most recent entries instead,
//! regardless of how far apart their dates are.
#![allow(clippy::cast_precision_loss)] // Safe: day counts are small
#![allow(clippy::cast_possible_truncation)] // Safe: ETA days are capped well below u64::MAX
#![allow(clippy::cast_sign_loss)] // Safe: ETA days are checked non-negative

use crate::config::intelligence::{GoalAnalyticsConfig, IntelligenceConfig, Language};
use crate::time_series::{day_distance, nearest_prior_sample};
use crate::Analysis;
use chrono::Days;
use goalpace_core::models::{CalendarDate, WeightObservation, WeightSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of the weight curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Weight is going down
    Falling,
    /// Weight is going up
    Rising,
    /// Change is within the dead band
    Stable,
}

impl Trend {
    /// Localized label as shown next to the pace
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Falling, Language::German) => "fallend",
            (Self::Rising, Language::German) => "steigend",
            (Self::Stable, Language::German) => "stabil",
            (Self::Falling, Language::English) => "falling",
            (Self::Rising, Language::English) => "rising",
            (Self::Stable, Language::English) => "stable",
            (Self::Falling, Language::Polish) => "spadkowy",
            (Self::Rising, Language::Polish) => "wzrostowy",
            (Self::Stable, Language::Polish) => "stabilny",
        }
    }
}

/// Which comparison produced the pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceMethod {
    /// Latest sample against a sample about one window earlier
    SevenDayReference,
    /// First against last of the most recent entries, by count
    TrailingEntries,
}

/// Pace together with the two samples it was measured between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceEstimate {
    /// Rate of change in kg/day; negative means losing weight
    pub pace: f64,
    /// How the pace was computed
    pub method: PaceMethod,
    /// Earlier sample of the comparison
    pub reference: WeightObservation,
    /// Later sample of the comparison (always the latest observation)
    pub latest: WeightObservation,
}

/// Derived weight metrics for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightMetrics {
    /// Rate of change in kg/day
    pub pace: f64,
    /// Classified direction
    pub trend: Trend,
    /// Whether the recent window is flat
    pub plateau: bool,
    /// Projected arrival date at the target, if moving toward it
    pub eta: Option<CalendarDate>,
    /// How the pace was computed
    pub pace_method: PaceMethod,
}

/// Pace, trend, plateau and ETA estimator
pub struct PaceEstimator {
    config: GoalAnalyticsConfig,
}

impl Default for PaceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaceEstimator {
    /// Create an estimator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().goal_analytics.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: GoalAnalyticsConfig) -> Self {
        Self { config }
    }

    /// Compute all metrics for a series
    ///
    /// `target_weight` is the goal weight, if any; `now` is the day the ETA is
    /// counted from. Fewer than two observations yield `InsufficientData`.
    #[must_use]
    pub fn metrics(
        &self,
        series: &WeightSeries,
        target_weight: Option<f64>,
        now: CalendarDate,
    ) -> Analysis<WeightMetrics> {
        self.estimate_pace(series).map(|estimate| WeightMetrics {
            pace: estimate.pace,
            trend: self.classify_trend(estimate.pace),
            plateau: self.detect_plateau(series),
            eta: self.estimate_eta(estimate.latest.weight, target_weight, estimate.pace, now),
            pace_method: estimate.method,
        })
    }

    /// Estimate the pace in kg/day
    ///
    /// Uses the sample on (or up to the configured tolerance before) the day
    /// one window before the latest observation. Without such a sample it
    /// falls back to the first and last of the trailing entries.
    #[must_use]
    pub fn estimate_pace(&self, series: &WeightSeries) -> Analysis<PaceEstimate> {
        if series.len() < 2 {
            debug!(observations = series.len(), "Not enough observations for pace");
            return Analysis::InsufficientData;
        }
        let Some(latest) = series.latest().copied() else {
            return Analysis::InsufficientData;
        };

        let pace_config = &self.config.pace;
        let reference = u64::try_from(pace_config.window_days)
            .ok()
            .and_then(|window| latest.date.checked_sub_days(Days::new(window)))
            .and_then(|reference_date| {
                nearest_prior_sample(series, reference_date, pace_config.sample_lookback_days)
            });

        if let Some(reference) = reference.copied() {
            return Analysis::Computed(PaceEstimate {
                pace: rate(&reference, &latest),
                method: PaceMethod::SevenDayReference,
                reference,
                latest,
            });
        }

        let trailing = series.trailing(pace_config.fallback_trailing_entries);
        match (trailing.first(), trailing.last()) {
            (Some(first), Some(last)) if trailing.len() >= 2 => {
                debug!(
                    from = %first.date,
                    to = %last.date,
                    "No reference sample in window; using trailing entries"
                );
                Analysis::Computed(PaceEstimate {
                    pace: rate(first, last),
                    method: PaceMethod::TrailingEntries,
                    reference: *first,
                    latest: *last,
                })
            }
            _ => Analysis::InsufficientData,
        }
    }

    /// Classify a pace into a trend using the stable dead band
    #[must_use]
    pub fn classify_trend(&self, pace: f64) -> Trend {
        let threshold = self.config.pace.stable_threshold_kg_per_day;
        if pace < -threshold {
            Trend::Falling
        } else if pace > threshold {
            Trend::Rising
        } else {
            Trend::Stable
        }
    }

    /// Whether the trailing window's net change is below the plateau threshold
    ///
    /// Independent of the trend: a noisy series can be a plateau and still
    /// show a non-zero pace.
    #[must_use]
    pub fn detect_plateau(&self, series: &WeightSeries) -> bool {
        let window = series.trailing(self.config.plateau.window_samples);
        match (window.first(), window.last()) {
            (Some(first), Some(last)) => {
                (last.weight - first.weight).abs() < self.config.plateau.threshold_kg
            }
            _ => false,
        }
    }

    /// Days needed to reach the target at the current pace
    ///
    /// `None` unless the pace moves toward the target, and for projections
    /// that are non-finite or beyond the configured horizon.
    #[must_use]
    pub fn days_to_target(&self, latest_weight: f64, target_weight: f64, pace: f64) -> Option<f64> {
        if !pace.is_finite() {
            return None;
        }
        let toward_loss = target_weight < latest_weight && pace < 0.0;
        let toward_gain = target_weight > latest_weight && pace > 0.0;
        if !(toward_loss || toward_gain) {
            return None;
        }

        let days_remaining = ((target_weight - latest_weight) / pace).abs();
        (days_remaining.is_finite() && days_remaining < self.config.eta.max_days)
            .then_some(days_remaining)
    }

    /// Projected date the target is reached, counted from `now`
    #[must_use]
    pub fn estimate_eta(
        &self,
        latest_weight: f64,
        target_weight: Option<f64>,
        pace: f64,
        now: CalendarDate,
    ) -> Option<CalendarDate> {
        let target_weight = target_weight.filter(|target| target.is_finite() && *target > 0.0)?;
        let days_remaining = self.days_to_target(latest_weight, target_weight, pace)?;
        now.checked_add_days(Days::new(days_remaining.round() as u64))
    }
}

/// Weight change per day between two samples
fn rate(from: &WeightObservation, to: &WeightObservation) -> f64 {
    (to.weight - from.weight) / day_distance(from.date, to.date) as f64
}
