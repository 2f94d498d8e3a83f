// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Combines logging settings with validated analytics configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use goalpace_core::errors::AppResult;
use goalpace_intelligence::config::intelligence::IntelligenceConfig;
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Analytics thresholds, windows and tip language
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unlike `IntelligenceConfig::global()`, which falls back to defaults,
    /// this surfaces invalid `GOALPACE_*` overrides as an error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an analytics override fails to parse
    /// or validate
    pub fn from_env() -> AppResult<Self> {
        let logging = LoggingConfig::from_env();
        let intelligence = IntelligenceConfig::load()?;
        debug!(
            language = %intelligence.advisory.language,
            max_tips = intelligence.advisory.limits.max_tips,
            "Loaded analytics configuration"
        );
        Ok(Self {
            logging,
            intelligence,
        })
    }
}
