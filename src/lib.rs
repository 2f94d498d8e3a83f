// ABOUTME: Main library entry point for the goalpace weight goal analytics
// ABOUTME: Re-exports the core models and analytics, plus snapshot loading and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goalpace
//!
//! Goal analytics for a daily weight tracker. Given the recorded weigh-ins,
//! water and sport entries and an active weight goal, goalpace computes:
//!
//! - **Trajectory**: where the straight-line plan expects the user today
//! - **Pace and trend**: kg/day over the last week, classified as falling, rising or stable
//! - **Plateau**: whether the recent weigh-ins are flat
//! - **ETA**: when the target is reached at the current pace
//! - **Tips**: a short prioritized list of advice
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use goalpace::errors::{AppError, AppResult};
//! use goalpace::snapshot::load_snapshot;
//! use goalpace::GoalAnalyticsEngine;
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let snapshot = load_snapshot(Path::new("days.json"))?;
//!     let now = NaiveDate::from_ymd_opt(2025, 3, 15)
//!         .ok_or_else(|| AppError::invalid_input("bad date"))?;
//!     let report = GoalAnalyticsEngine::new().report(&snapshot, now);
//!     println!("{} tips", report.tips.len());
//!     Ok(())
//! }
//! ```

/// Environment-based application configuration
pub mod config;

/// Text and JSON rendering of goal reports
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Loading of day store snapshots
pub mod snapshot;

pub use goalpace_core::{constants, errors, models};
pub use goalpace_intelligence::{
    advisory, body_metrics, goal_engine, pace_estimator, time_series, trajectory, Analysis,
    GoalAnalyticsEngine, GoalReport,
};
