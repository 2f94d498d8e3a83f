// ABOUTME: Report command for goalpace-cli
// ABOUTME: Loads a snapshot, computes the goal report and prints it as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use goalpace::config::AppConfig;
use goalpace::formatters::{format_report, OutputFormat};
use goalpace::models::CalendarDate;
use goalpace::snapshot::load_snapshot;
use goalpace::time_series::parse_calendar_date;
use goalpace::GoalAnalyticsEngine;
use goalpace_core::errors::{AppError, AppResult};
use std::path::Path;
use tracing::info;

/// Compute and print the goal report
pub fn run(
    config: &AppConfig,
    snapshot_path: &Path,
    now: Option<&str>,
    format: &str,
) -> AppResult<()> {
    let format: OutputFormat = format.parse()?;
    let now = resolve_now(now)?;
    let snapshot = load_snapshot(snapshot_path)?;

    info!(%now, %format, "Computing goal report");
    let engine = GoalAnalyticsEngine::with_config(&config.intelligence);
    let report = engine.report(&snapshot, now);

    let rendered = format_report(&report, format, config.intelligence.advisory.language)?;
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn resolve_now(now: Option<&str>) -> AppResult<CalendarDate> {
    now.map_or_else(
        || Ok(Local::now().date_naive()),
        |text| {
            parse_calendar_date(text).ok_or_else(|| {
                AppError::invalid_input(format!("'{text}' is not a YYYY-MM-DD date"))
            })
        },
    )
}
