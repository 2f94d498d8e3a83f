// ABOUTME: Configuration module for goalpace-intelligence crate
// ABOUTME: Re-exports analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics configuration (pace, plateau, ETA, advisory rules, body metrics)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
