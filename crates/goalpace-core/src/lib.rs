// ABOUTME: Core types and constants for goalpace weight goal analytics
// ABOUTME: Foundation crate with error handling, day store models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goalpace Core
//!
//! Foundation crate providing the shared data model for weight goal analytics.
//! It is designed to change infrequently so the analytics crate and the CLI can
//! build on a stable set of types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default thresholds and unit constants organized by domain
//! - **models**: Weight observations, goals, daily aggregates and the day store snapshot

/// Unified error handling system with standard error codes
pub mod errors;

/// Default analytics thresholds and unit constants organized by domain
pub mod constants;

/// Core data models (`WeightObservation`, `GoalDescriptor`, `DayStoreSnapshot`, ...)
pub mod models;
