// ABOUTME: Tests for loading day store snapshots from JSON files
// ABOUTME: Covers the JSON layout, defaults for missing fields, and error code mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use goalpace::errors::ErrorCode;
use goalpace::snapshot::{load_snapshot, parse_snapshot};
use std::fs;
use tempfile::TempDir;

const SNAPSHOT_JSON: &str = r#"{
  "days": {
    "2025-03-01": { "weight": 80.0, "water": 4, "sport": true },
    "2025-03-02": { "water": 2 },
    "2025-03-08": { "weight": 79.0 }
  },
  "goal": { "target_weight": 70.0, "target_date": "2025-06-09", "start_weight": 80.0 },
  "profile": { "height_cm": 172.0 }
}"#;

#[test]
fn test_parse_full_snapshot() {
    let snapshot = parse_snapshot(SNAPSHOT_JSON).unwrap();

    assert_eq!(snapshot.days.len(), 3);
    let first = snapshot.days[&date("2025-03-01")];
    assert_eq!(first.weight, Some(80.0));
    assert_eq!(first.water, 4);
    assert!(first.sport);

    let water_only = snapshot.days[&date("2025-03-02")];
    assert_eq!(water_only.weight, None);
    assert!(!water_only.sport);

    let goal = snapshot.active_goal().unwrap();
    assert_eq!(goal.target_date, "2025-06-09");
    assert_eq!(snapshot.profile.height_cm, Some(172.0));
    assert_eq!(snapshot.weight_series().len(), 2);
}

#[test]
fn test_parse_empty_object_uses_defaults() {
    let snapshot = parse_snapshot("{}").unwrap();
    assert!(snapshot.days.is_empty());
    assert!(snapshot.goal.is_none());
    assert!(snapshot.profile.height_cm.is_none());
}

#[test]
fn test_inactive_goal_round_trip() {
    let json = r#"{ "goal": { "target_weight": 70.0, "target_date": "2025-06-09",
                             "start_weight": 80.0, "active": false } }"#;
    let snapshot = parse_snapshot(json).unwrap();
    assert!(snapshot.goal.is_some());
    assert!(snapshot.active_goal().is_none());
}

#[test]
fn test_invalid_weights_are_dropped_from_series() {
    let json = r#"{ "days": {
        "2025-03-01": { "weight": 0.0 },
        "2025-03-02": { "weight": -3.5 },
        "2025-03-03": { "weight": 81.2 }
    } }"#;
    let series = parse_snapshot(json).unwrap().weight_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series.latest().unwrap().date, date("2025-03-03"));
}

#[test]
fn test_malformed_json_is_invalid_format() {
    let error = parse_snapshot("{ \"days\": [").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = parse_snapshot(r#"{ "days": { "yesterday": {} } }"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_load_snapshot_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("days.json");
    fs::write(&path, SNAPSHOT_JSON).unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    assert_eq!(snapshot.days.len(), 3);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_snapshot(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("missing.json"));
}

#[test]
fn test_directory_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = load_snapshot(dir.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}
