// ABOUTME: Configuration module for the goalpace application layer
// ABOUTME: Bundles logging and analytics configuration loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only:
//!
//! - **Logging**: `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_*`, `SERVICE_NAME`, `ENVIRONMENT`
//! - **Analytics**: `GOALPACE_*` thresholds, windows and tip language

/// Application configuration from environment variables
pub mod environment;

pub use environment::AppConfig;
pub use goalpace_intelligence::config::intelligence::{
    AdvisoryConfig, BodyMetricsConfig, ConfigError, GoalAnalyticsConfig, IntelligenceConfig,
    Language,
};
