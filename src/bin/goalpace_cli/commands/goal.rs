// ABOUTME: Goal editor commands for goalpace-cli
// ABOUTME: Validates goal form input and weight entries with "no update" semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use goalpace::models::WeightSeries;
use goalpace::snapshot::load_snapshot;
use goalpace::time_series::parse_weight_input;
use goalpace::GoalAnalyticsEngine;
use goalpace_core::errors::AppResult;
use std::path::Path;

use crate::helpers::display::{display_goal, display_no_update};

/// Validate goal input and print the resulting goal, or "no update"
pub fn run(target_weight: &str, target_date: &str, snapshot_path: Option<&Path>) -> AppResult<()> {
    let series = match snapshot_path {
        Some(path) => load_snapshot(path)?.weight_series(),
        None => WeightSeries::default(),
    };

    match GoalAnalyticsEngine::goal_from_input(target_weight, target_date, &series) {
        Some(goal) => display_goal(&goal)?,
        None => display_no_update(),
    }
    Ok(())
}

/// Print the parsed weight, or "no update"
pub fn parse_weight(text: &str) {
    match parse_weight_input(text) {
        Some(weight) => println!("{weight}"),
        None => display_no_update(),
    }
}
