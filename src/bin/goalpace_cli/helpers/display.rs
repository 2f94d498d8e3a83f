// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for goalpace-cli
// ABOUTME: Consistent stdout rendering for goal editor results

use goalpace::formatters::to_json;
use goalpace::models::GoalDescriptor;
use goalpace_core::errors::AppResult;

/// Marker printed when input is rejected and nothing changes
pub const NO_UPDATE: &str = "no update";

/// Print an accepted goal as JSON
pub fn display_goal(goal: &GoalDescriptor) -> AppResult<()> {
    println!("{}", to_json(goal)?);
    Ok(())
}

/// Print the rejection marker
pub fn display_no_update() {
    println!("{NO_UPDATE}");
}
