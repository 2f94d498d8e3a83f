// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default thresholds for pace, plateau, ETA, advisory rules, and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! These values are the defaults behind the overridable configuration in
//! `goalpace-intelligence`. Nothing in the analytics reads them directly.

/// Pace, trend, plateau and ETA defaults
pub mod goal_analytics {
    /// Days looked back from the latest observation to find the pace reference
    pub const PACE_WINDOW_DAYS: i64 = 7;

    /// Days the reference lookup may walk back when the exact day has no sample
    pub const SAMPLE_LOOKBACK_DAYS: i64 = 3;

    /// Longest pace window accepted from configuration
    pub const MAX_PACE_WINDOW_DAYS: i64 = 365;

    /// Trailing entries (by count) used when no reference sample exists
    pub const FALLBACK_TRAILING_ENTRIES: usize = 7;

    /// Pace magnitude (kg/day) below which the trend is reported as stable
    pub const PACE_STABLE_THRESHOLD_KG_PER_DAY: f64 = 0.02;

    /// Trailing observations inspected for plateau detection
    pub const PLATEAU_WINDOW_SAMPLES: usize = 10;

    /// Net change (kg) across the plateau window that still counts as a plateau
    pub const PLATEAU_THRESHOLD_KG: f64 = 0.5;

    /// ETA projections at or beyond this many days are not reported (5 years)
    pub const ETA_MAX_DAYS: f64 = 1825.0;
}

/// Advisory rule defaults
pub mod advisory {
    /// Daily loss (kg/day, negative) beyond which the rapid-loss tip fires
    pub const RAPID_LOSS_THRESHOLD_KG_PER_DAY: f64 = -0.25;

    /// Average water units per day below which the hydration tip fires
    pub const HYDRATION_MIN_UNITS: f64 = 3.0;

    /// Sport days per window below which the activity tip fires
    pub const ACTIVITY_MIN_DAYS: usize = 2;

    /// Day records (by count) aggregated for the hydration and activity rules
    pub const AGGREGATE_WINDOW_DAYS: usize = 7;

    /// Maximum number of tips returned
    pub const MAX_TIPS: usize = 3;
}

/// Body metric defaults
pub mod body_metrics {
    /// Water target per kilogram of body weight (ml)
    pub const WATER_ML_PER_KG: f64 = 35.0;

    /// Water target when no weight is known (ml)
    pub const DEFAULT_WATER_TARGET_ML: u32 = 2000;

    /// Extra water on sport days (ml)
    pub const SPORT_WATER_BONUS_ML: u32 = 500;
}

/// Unit conversion constants
pub mod units {
    /// Centimetres per metre
    pub const CM_PER_METER: f64 = 100.0;

    /// Percentage scale
    pub const PERCENT: f64 = 100.0;
}
