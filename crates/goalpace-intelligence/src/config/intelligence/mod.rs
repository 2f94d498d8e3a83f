// ABOUTME: Analytics configuration root with environment overrides and validation
// ABOUTME: Provides the process-wide configuration used by the estimator, projector and advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Every threshold the analytics use lives here. Configuration is
//! environment-only: `load()` starts from the defaults in
//! `goalpace_core::constants`, applies `GOALPACE_*` overrides, and validates
//! the result.

mod advisory;
mod body_metrics;
mod error;
mod goal_analytics;

pub use advisory::{AdvisoryConfig, AdvisoryLimits, AdvisoryThresholds, Language};
pub use body_metrics::BodyMetricsConfig;
pub use error::ConfigError;
pub use goal_analytics::{EtaConfig, GoalAnalyticsConfig, PaceConfig, PlateauConfig};

use goalpace_core::constants::goal_analytics::MAX_PACE_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Root analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Pace, trend, plateau and ETA settings
    pub goal_analytics: GoalAnalyticsConfig,
    /// Advisory rule settings
    pub advisory: AdvisoryConfig,
    /// Body metric settings
    pub body_metrics: BodyMetricsConfig,
}

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first access. Invalid overrides are
    /// logged and the defaults are used instead.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the resulting
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges and relationships between values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` naming the first offending value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pace = &self.goal_analytics.pace;
        if !(1..=MAX_PACE_WINDOW_DAYS).contains(&pace.window_days) {
            return Err(ConfigError::InvalidRange(
                "pace window must be between one day and one year",
            ));
        }
        if !(0..=pace.window_days).contains(&pace.sample_lookback_days) {
            return Err(ConfigError::InvalidRange(
                "sample lookback must be between zero and the pace window",
            ));
        }
        if pace.fallback_trailing_entries < 2 {
            return Err(ConfigError::InvalidRange(
                "fallback pace needs at least two trailing entries",
            ));
        }
        if !(pace.stable_threshold_kg_per_day.is_finite() && pace.stable_threshold_kg_per_day >= 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "stable pace threshold must be a non-negative number",
            ));
        }

        let plateau = &self.goal_analytics.plateau;
        if plateau.window_samples < 2 {
            return Err(ConfigError::InvalidRange(
                "plateau window needs at least two samples",
            ));
        }
        if !(plateau.threshold_kg.is_finite() && plateau.threshold_kg > 0.0) {
            return Err(ConfigError::InvalidRange(
                "plateau threshold must be positive",
            ));
        }

        let eta = &self.goal_analytics.eta;
        if !(eta.max_days.is_finite() && eta.max_days > 0.0) {
            return Err(ConfigError::InvalidRange("ETA horizon must be positive"));
        }

        let thresholds = &self.advisory.thresholds;
        if !(thresholds.rapid_loss_kg_per_day.is_finite() && thresholds.rapid_loss_kg_per_day < 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "rapid loss threshold must be negative",
            ));
        }
        if !(thresholds.hydration_min_units.is_finite() && thresholds.hydration_min_units >= 0.0) {
            return Err(ConfigError::InvalidRange(
                "hydration threshold must not be negative",
            ));
        }

        let limits = &self.advisory.limits;
        if limits.max_tips == 0 {
            return Err(ConfigError::InvalidRange("at least one tip must be allowed"));
        }
        if limits.aggregate_window_days == 0 {
            return Err(ConfigError::InvalidRange(
                "aggregate window must cover at least one day",
            ));
        }

        let body = &self.body_metrics;
        if !(body.water_ml_per_kg.is_finite() && body.water_ml_per_kg > 0.0) {
            return Err(ConfigError::InvalidRange(
                "water per kilogram must be positive",
            ));
        }

        Ok(())
    }

    /// Apply `GOALPACE_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the variable that failed to parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let pace = &mut self.goal_analytics.pace;
        env_override("GOALPACE_PACE_WINDOW_DAYS", &mut pace.window_days)?;
        env_override(
            "GOALPACE_SAMPLE_LOOKBACK_DAYS",
            &mut pace.sample_lookback_days,
        )?;
        env_override(
            "GOALPACE_FALLBACK_TRAILING_ENTRIES",
            &mut pace.fallback_trailing_entries,
        )?;
        env_override(
            "GOALPACE_PACE_STABLE_THRESHOLD",
            &mut pace.stable_threshold_kg_per_day,
        )?;

        let plateau = &mut self.goal_analytics.plateau;
        env_override("GOALPACE_PLATEAU_WINDOW", &mut plateau.window_samples)?;
        env_override("GOALPACE_PLATEAU_THRESHOLD_KG", &mut plateau.threshold_kg)?;

        env_override("GOALPACE_ETA_MAX_DAYS", &mut self.goal_analytics.eta.max_days)?;

        let thresholds = &mut self.advisory.thresholds;
        env_override(
            "GOALPACE_RAPID_LOSS_THRESHOLD",
            &mut thresholds.rapid_loss_kg_per_day,
        )?;
        env_override(
            "GOALPACE_HYDRATION_MIN_UNITS",
            &mut thresholds.hydration_min_units,
        )?;
        env_override(
            "GOALPACE_ACTIVITY_MIN_DAYS",
            &mut thresholds.activity_min_days,
        )?;

        let limits = &mut self.advisory.limits;
        env_override("GOALPACE_MAX_TIPS", &mut limits.max_tips)?;
        env_override(
            "GOALPACE_AGGREGATE_WINDOW_DAYS",
            &mut limits.aggregate_window_days,
        )?;

        env_override("GOALPACE_LANGUAGE", &mut self.advisory.language)?;

        let body = &mut self.body_metrics;
        env_override("GOALPACE_WATER_ML_PER_KG", &mut body.water_ml_per_kg)?;
        env_override(
            "GOALPACE_DEFAULT_WATER_TARGET_ML",
            &mut body.default_water_target_ml,
        )?;
        env_override(
            "GOALPACE_SPORT_WATER_BONUS_ML",
            &mut body.sport_water_bonus_ml,
        )?;

        Ok(self)
    }
}

/// Overwrite `target` with the parsed value of `name` when it is set
fn env_override<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
    }
    Ok(())
}
