// ABOUTME: Goal analytics configuration for pace, trend, plateau and ETA estimation
// ABOUTME: Configures windows, tolerances and thresholds used by the estimator and projector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Analytics Configuration
//!
//! Provides configuration for the pace estimator: the 7-day reference window
//! and its lookup tolerance, the trend dead band, plateau detection and the
//! ETA horizon.

use goalpace_core::constants::goal_analytics::{
    ETA_MAX_DAYS, FALLBACK_TRAILING_ENTRIES, PACE_STABLE_THRESHOLD_KG_PER_DAY, PACE_WINDOW_DAYS,
    PLATEAU_THRESHOLD_KG, PLATEAU_WINDOW_SAMPLES, SAMPLE_LOOKBACK_DAYS,
};
use serde::{Deserialize, Serialize};

/// Goal Analytics Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalAnalyticsConfig {
    /// Pace and trend settings
    pub pace: PaceConfig,
    /// Plateau detection settings
    pub plateau: PlateauConfig,
    /// ETA projection settings
    pub eta: EtaConfig,
}

/// Configuration for pace calculation and trend classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Days back from the latest observation to the reference sample
    pub window_days: i64,
    /// Extra days the reference lookup may walk back on a miss
    pub sample_lookback_days: i64,
    /// Trailing entries (by count) compared when no reference sample exists
    pub fallback_trailing_entries: usize,
    /// Pace magnitude (kg/day) at or below which the trend is stable
    pub stable_threshold_kg_per_day: f64,
}

/// Configuration for plateau detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Trailing observations inspected
    pub window_samples: usize,
    /// Net change (kg) below which the window counts as a plateau
    pub threshold_kg: f64,
}

/// Configuration for ETA projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtaConfig {
    /// Projections of this many days or more are not reported
    pub max_days: f64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            window_days: PACE_WINDOW_DAYS,
            sample_lookback_days: SAMPLE_LOOKBACK_DAYS,
            fallback_trailing_entries: FALLBACK_TRAILING_ENTRIES,
            stable_threshold_kg_per_day: PACE_STABLE_THRESHOLD_KG_PER_DAY,
        }
    }
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_samples: PLATEAU_WINDOW_SAMPLES,
            threshold_kg: PLATEAU_THRESHOLD_KG,
        }
    }
}

impl Default for EtaConfig {
    fn default() -> Self {
        Self {
            max_days: ETA_MAX_DAYS,
        }
    }
}
