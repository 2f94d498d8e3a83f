// ABOUTME: Core data models for weight goal analytics
// ABOUTME: Re-exports weight observations, goals, daily aggregates and the day store snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The day store itself is owned by the application; these types are the
//! read-only view of it that the analytics consume.
//!
//! ## Core Models
//!
//! - `WeightObservation` / `WeightSeries`: one weight per calendar day, sorted by date
//! - `GoalDescriptor`: the user's target weight and target date
//! - `DailyAggregate`: per-day hydration count and sport flag
//! - `UserProfile`: body data used for BMI
//! - `DayStoreSnapshot`: everything above, as handed over by the store

mod day;
mod goal;
mod snapshot;
mod weight;

pub use day::{DailyAggregate, UserProfile};
pub use goal::GoalDescriptor;
pub use snapshot::{DayEntry, DayStoreSnapshot};
pub use weight::{WeightObservation, WeightSeries};

/// Calendar day used throughout the analytics
pub type CalendarDate = chrono::NaiveDate;

/// Text format of calendar dates in the day store and in user input
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
