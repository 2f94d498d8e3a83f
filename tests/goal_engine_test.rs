// ABOUTME: Tests for the combined goal report and the goal editor
// ABOUTME: Covers report assembly from snapshots, body metrics, and "no update" goal input handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, config, day, goal, init_test_logging, log_day, series, snapshot_with};
use goalpace::advisory::TipKind;
use goalpace::body_metrics::BodyMetricsCalculator;
use goalpace::models::{DayStoreSnapshot, WeightSeries};
use goalpace::{Analysis, GoalAnalyticsEngine};
use serde_json::Value;

fn engine() -> GoalAnalyticsEngine {
    init_test_logging();
    GoalAnalyticsEngine::with_config(&config())
}

fn week_snapshot() -> DayStoreSnapshot {
    snapshot_with(&[(0, 80.0), (7, 79.0)], Some(goal(70.0, 100, 80.0)))
}

#[test]
fn test_report_for_one_week_of_progress() {
    let report = engine().report(&week_snapshot(), day(7));

    let projection = report.projection.computed().unwrap();
    assert_close(projection.planned_today, 79.3, 1e-9);
    assert_close(projection.delta, -0.3, 1e-9);
    assert_close(report.remaining_percent.unwrap(), 90.0, 1e-9);

    let metrics = report.metrics.computed().unwrap();
    assert_close(metrics.pace, -1.0 / 7.0, 1e-12);
    assert_eq!(metrics.eta, Some(day(70)));

    assert_eq!(report.latest_weight, Some(79.0));
    assert_eq!(report.generated_for, day(7));
    assert_eq!(report.water_target_ml, 2765);
    assert_eq!(report.bmi, None);

    // No water or sport logged on either day
    let kinds: Vec<TipKind> = report.tips.iter().map(|tip| tip.kind).collect();
    assert_eq!(kinds, vec![TipKind::Hydration, TipKind::Activity]);
}

#[test]
fn test_report_with_good_habits_encourages() {
    let mut snapshot = week_snapshot();
    for offset in 0..7 {
        log_day(&mut snapshot, offset, 4, offset % 2 == 0);
    }
    let report = engine().report(&snapshot, day(7));
    assert_eq!(report.tips.len(), 1);
    assert_eq!(report.tips[0].kind, TipKind::Encouragement);
}

#[test]
fn test_sport_today_raises_water_target() {
    let mut snapshot = week_snapshot();
    log_day(&mut snapshot, 7, 0, true);
    let report = engine().report(&snapshot, day(7));
    assert_eq!(report.water_target_ml, 2765 + 500);

    let tomorrow = engine().report(&snapshot, day(8));
    assert_eq!(tomorrow.water_target_ml, 2765);
}

#[test]
fn test_report_bmi_uses_profile_height() {
    let mut snapshot = week_snapshot();
    snapshot.profile.height_cm = Some(175.0);
    let report = engine().report(&snapshot, day(7));
    assert_close(report.bmi.unwrap(), 79.0 / (1.75 * 1.75), 1e-9);
}

#[test]
fn test_report_for_empty_store() {
    let report = engine().report(&DayStoreSnapshot::default(), day(0));

    assert!(report.projection.is_insufficient());
    assert!(report.metrics.is_insufficient());
    assert_eq!(report.remaining_percent, None);
    assert_eq!(report.latest_weight, None);
    assert_eq!(report.water_target_ml, 2000);
    // Nothing logged counts as zero water and zero sport days
    let kinds: Vec<TipKind> = report.tips.iter().map(|tip| tip.kind).collect();
    assert_eq!(kinds, vec![TipKind::Hydration, TipKind::Activity]);
}

#[test]
fn test_report_for_single_weigh_in() {
    let snapshot = snapshot_with(&[(0, 80.0)], None);
    let report = engine().report(&snapshot, day(0));

    assert!(report.projection.is_insufficient());
    assert!(report.metrics.is_insufficient());
    assert_eq!(report.latest_weight, Some(80.0));
    let kinds: Vec<TipKind> = report.tips.iter().map(|tip| tip.kind).collect();
    assert_eq!(kinds, vec![TipKind::Hydration, TipKind::Activity]);
}

#[test]
fn test_single_weigh_in_with_water_logged() {
    let mut snapshot = snapshot_with(&[(0, 80.0)], None);
    log_day(&mut snapshot, 0, 5, true);
    let report = engine().report(&snapshot, day(0));

    assert!(report.metrics.is_insufficient());
    let kinds: Vec<TipKind> = report.tips.iter().map(|tip| tip.kind).collect();
    assert_eq!(kinds, vec![TipKind::Activity]);
}

#[test]
fn test_inactive_goal_is_ignored() {
    let mut inactive = goal(70.0, 100, 80.0);
    inactive.active = false;
    let snapshot = snapshot_with(&[(0, 80.0), (7, 79.0)], Some(inactive));

    let report = engine().report(&snapshot, day(7));
    assert!(report.goal.is_none());
    assert!(report.projection.is_insufficient());
    let metrics = report.metrics.computed().unwrap();
    assert_eq!(metrics.eta, None);
}

#[test]
fn test_records_without_weight_do_not_break_series() {
    let mut snapshot = week_snapshot();
    log_day(&mut snapshot, 3, 5, true);
    assert_eq!(snapshot.weight_series().len(), 2);
    assert_eq!(snapshot.daily_aggregates().len(), 3);
}

#[test]
fn test_report_is_deterministic() {
    let snapshot = week_snapshot();
    let engine = engine();
    assert_eq!(engine.report(&snapshot, day(7)), engine.report(&snapshot, day(7)));
}

#[test]
fn test_report_serializes_with_status_tags() {
    let report = engine().report(&week_snapshot(), day(7));
    let json: Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["projection"]["status"], "computed");
    assert_eq!(json["metrics"]["value"]["trend"], "falling");
    assert_eq!(json["generated_for"], "2025-01-08");

    let empty = engine().report(&DayStoreSnapshot::default(), day(0));
    let json: Value = serde_json::to_value(&empty).unwrap();
    assert_eq!(json["projection"]["status"], "insufficient_data");
    assert!(json["projection"].get("value").is_none());
}

#[test]
fn test_goal_from_valid_input() {
    let weights = series(&[(0, 82.0), (7, 80.0)]);
    let goal = GoalAnalyticsEngine::goal_from_input("72,5", " 2025-06-30 ", &weights).unwrap();

    assert_close(goal.target_weight, 72.5, 1e-12);
    assert_eq!(goal.target_date, "2025-06-30");
    assert_close(goal.start_weight, 82.0, 1e-12);
    assert!(goal.active);
}

#[test]
fn test_goal_without_history_starts_at_target() {
    let goal =
        GoalAnalyticsEngine::goal_from_input("65", "2025-09-01", &WeightSeries::default()).unwrap();
    assert_close(goal.start_weight, 65.0, 1e-12);
}

#[test]
fn test_invalid_goal_input_means_no_update() {
    let weights = series(&[(0, 80.0)]);
    for (weight, date) in [
        ("abc", "2025-06-30"),
        ("0", "2025-06-30"),
        ("-70", "2025-06-30"),
        ("", "2025-06-30"),
        ("70", "30.06.2025"),
        ("70", "2025-13-01"),
        ("70", ""),
    ] {
        assert!(
            GoalAnalyticsEngine::goal_from_input(weight, date, &weights).is_none(),
            "({weight}, {date}) should be rejected"
        );
    }
}

#[test]
fn test_bmi() {
    assert_close(
        BodyMetricsCalculator::bmi(Some(72.0), Some(180.0)).unwrap(),
        22.222_222,
        1e-6,
    );
    assert_eq!(BodyMetricsCalculator::bmi(None, Some(180.0)), None);
    assert_eq!(BodyMetricsCalculator::bmi(Some(72.0), None), None);
    assert_eq!(BodyMetricsCalculator::bmi(Some(72.0), Some(0.0)), None);
}

#[test]
fn test_water_target() {
    let calculator = BodyMetricsCalculator::with_config(config().body_metrics);
    assert_eq!(calculator.daily_water_target_ml(Some(80.0), false), 2800);
    assert_eq!(calculator.daily_water_target_ml(Some(80.0), true), 3300);
    assert_eq!(calculator.daily_water_target_ml(None, false), 2000);
    assert_eq!(calculator.daily_water_target_ml(None, true), 2500);
    assert_eq!(calculator.daily_water_target_ml(Some(-1.0), false), 2000);
}

#[test]
fn test_analysis_from_option() {
    assert_eq!(Analysis::from(Some(3)), Analysis::Computed(3));
    assert_eq!(Analysis::<i32>::from(None), Analysis::InsufficientData);
}
