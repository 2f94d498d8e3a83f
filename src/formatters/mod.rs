// ABOUTME: Output formatting for goal reports and goal descriptors
// ABOUTME: Human-readable text for terminals and pretty JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: the goal view as plain text (default)
//! - **JSON**: the full serialized report

use goalpace_core::errors::{AppError, AppResult};
use goalpace_intelligence::config::intelligence::Language;
use goalpace_intelligence::{Analysis, GoalReport};
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text for terminals
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns a serialization error if the value cannot be represented as JSON
pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a goal report in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON output fails
pub fn format_report(report: &GoalReport, format: OutputFormat, language: Language) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            render_text(report, language).map_err(|e| AppError::internal(e.to_string()))
        }
    }
}

const NOT_ENOUGH_DATA: &str = "Not enough data";
const NONE_MARK: &str = "—";

fn render_text(report: &GoalReport, language: Language) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Goal report for {}", report.generated_for)?;

    writeln!(out)?;
    writeln!(out, "Plan vs. actual")?;
    match report.projection {
        Analysis::Computed(projection) => {
            writeln!(out, "  Planned today: {:.1} kg", projection.planned_today)?;
            writeln!(
                out,
                "  Actual: {:.1} kg ({:+.1} kg)",
                projection.actual, projection.delta
            )?;
            if let Some(remaining) = report.remaining_percent {
                writeln!(out, "  Remaining to target: {remaining:.0}%")?;
            }
        }
        Analysis::InsufficientData => writeln!(out, "  {NOT_ENOUGH_DATA}")?,
    }

    writeln!(out)?;
    writeln!(out, "Pace · ETA · Trend · BMI")?;
    match report.metrics {
        Analysis::Computed(metrics) => {
            writeln!(out, "  Pace (7d): {:.3} kg/day", metrics.pace)?;
            let plateau = if metrics.plateau { " · plateau" } else { "" };
            writeln!(out, "  Trend: {}{plateau}", metrics.trend.label(language))?;
            match metrics.eta {
                Some(eta) => writeln!(out, "  ETA: {eta}")?,
                None => writeln!(out, "  ETA: {NONE_MARK}")?,
            }
        }
        Analysis::InsufficientData => writeln!(out, "  Pace (7d): {NOT_ENOUGH_DATA}")?,
    }
    match report.bmi {
        Some(bmi) => writeln!(out, "  BMI: {bmi:.1}")?,
        None => writeln!(out, "  BMI: {NONE_MARK}")?,
    }
    writeln!(out, "  Water target: {} ml", report.water_target_ml)?;

    writeln!(out)?;
    writeln!(out, "Tips")?;
    for tip in &report.tips {
        writeln!(out, "  • {}", tip.message)?;
    }

    Ok(out)
}
