// ABOUTME: Body metrics derived from the latest weight and the user profile
// ABOUTME: BMI and the daily water target with its sport-day bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::cast_possible_truncation)] // Safe: water targets are a few litres
#![allow(clippy::cast_sign_loss)] // Safe: weights are validated positive

use crate::config::intelligence::{BodyMetricsConfig, IntelligenceConfig};
use goalpace_core::constants::units::CM_PER_METER;

/// Calculator for BMI and hydration targets
pub struct BodyMetricsCalculator {
    config: BodyMetricsConfig,
}

impl Default for BodyMetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyMetricsCalculator {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().body_metrics.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: BodyMetricsConfig) -> Self {
        Self { config }
    }

    /// Body mass index, `None` without a positive weight and height
    #[must_use]
    pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
        let weight = weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
        let height_m = height_cm.filter(|h| h.is_finite() && *h > 0.0)? / CM_PER_METER;
        Some(weight / (height_m * height_m))
    }

    /// Daily water target in ml
    ///
    /// Scales with body weight when one is known, otherwise the default, plus
    /// a bonus on sport days.
    #[must_use]
    pub fn daily_water_target_ml(&self, weight_kg: Option<f64>, did_sport: bool) -> u32 {
        let base = weight_kg
            .filter(|w| w.is_finite() && *w > 0.0)
            .map_or(self.config.default_water_target_ml, |weight| {
                (weight * self.config.water_ml_per_kg).round() as u32
            });
        let bonus = if did_sport {
            self.config.sport_water_bonus_ml
        } else {
            0
        };
        base.saturating_add(bonus)
    }
}
