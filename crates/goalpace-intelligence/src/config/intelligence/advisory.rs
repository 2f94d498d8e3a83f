// ABOUTME: Advisory engine configuration for goal tips
// ABOUTME: Configures rule thresholds, output limits and the tip language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advisory Engine Configuration

use goalpace_core::constants::advisory::{
    ACTIVITY_MIN_DAYS, AGGREGATE_WINDOW_DAYS, HYDRATION_MIN_UNITS, MAX_TIPS,
    RAPID_LOSS_THRESHOLD_KG_PER_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advisory Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Threshold values for triggering tips
    pub thresholds: AdvisoryThresholds,
    /// Limits on tip generation
    pub limits: AdvisoryLimits,
    /// Language tips are rendered in
    pub language: Language,
}

/// Thresholds for the advisory rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    /// Pace (kg/day) below which weight loss counts as rapid
    pub rapid_loss_kg_per_day: f64,
    /// Average water units per day below which the hydration tip fires
    pub hydration_min_units: f64,
    /// Sport days per aggregate window below which the activity tip fires
    pub activity_min_days: usize,
}

/// Limits on tip generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryLimits {
    /// Maximum number of tips returned
    pub max_tips: usize,
    /// Most recent day records aggregated for hydration and activity
    pub aggregate_window_days: usize,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            rapid_loss_kg_per_day: RAPID_LOSS_THRESHOLD_KG_PER_DAY,
            hydration_min_units: HYDRATION_MIN_UNITS,
            activity_min_days: ACTIVITY_MIN_DAYS,
        }
    }
}

impl Default for AdvisoryLimits {
    fn default() -> Self {
        Self {
            max_tips: MAX_TIPS,
            aggregate_window_days: AGGREGATE_WINDOW_DAYS,
        }
    }
}

/// Languages the app ships tip texts in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// German
    #[serde(rename = "de")]
    German,
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Polish
    #[serde(rename = "pl")]
    Polish,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
            Self::Polish => "pl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" | "german" | "deutsch" => Ok(Self::German),
            "en" | "english" => Ok(Self::English),
            "pl" | "polish" | "polski" => Ok(Self::Polish),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}
