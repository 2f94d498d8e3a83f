// ABOUTME: Per-day auxiliary aggregates and user profile data
// ABOUTME: Read-only inputs for the advisory rules and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CalendarDate;
use serde::{Deserialize, Serialize};

/// Hydration and activity for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Calendar day
    pub date: CalendarDate,
    /// Water units (cups) logged that day
    pub water: u32,
    /// Whether the user did sport that day
    pub sport: bool,
}

/// Profile data relevant to body metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
}
