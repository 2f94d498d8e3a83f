// ABOUTME: Body metrics configuration for the daily water target
// ABOUTME: Configures per-kilogram intake, the no-weight default and the sport bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use goalpace_core::constants::body_metrics::{
    DEFAULT_WATER_TARGET_ML, SPORT_WATER_BONUS_ML, WATER_ML_PER_KG,
};
use serde::{Deserialize, Serialize};

/// Body Metrics Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetricsConfig {
    /// Water target per kilogram of body weight (ml)
    pub water_ml_per_kg: f64,
    /// Water target when no weight is known (ml)
    pub default_water_target_ml: u32,
    /// Extra water on sport days (ml)
    pub sport_water_bonus_ml: u32,
}

impl Default for BodyMetricsConfig {
    fn default() -> Self {
        Self {
            water_ml_per_kg: WATER_ML_PER_KG,
            default_water_target_ml: DEFAULT_WATER_TARGET_ML,
            sport_water_bonus_ml: SPORT_WATER_BONUS_ML,
        }
    }
}
