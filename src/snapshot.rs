// ABOUTME: Loading of day store snapshots exported as JSON
// ABOUTME: Maps missing files, I/O failures and malformed JSON onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day store snapshot loading
//!
//! The day store is owned by the app. The CLI works on a JSON export of it:
//!
//! ```json
//! {
//!   "days": { "2025-03-01": { "weight": 80.0, "water": 4, "sport": true } },
//!   "goal": { "target_weight": 70.0, "target_date": "2025-06-09", "start_weight": 80.0 },
//!   "profile": { "height_cm": 172.0 }
//! }
//! ```

use goalpace_core::errors::{AppError, AppResult};
use goalpace_core::models::DayStoreSnapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Parse a snapshot from JSON text
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the text is not a valid snapshot
pub fn parse_snapshot(json: &str) -> AppResult<DayStoreSnapshot> {
    let snapshot: DayStoreSnapshot = serde_json::from_str(json)?;
    debug!(
        days = snapshot.days.len(),
        has_goal = snapshot.goal.is_some(),
        "Parsed day store snapshot"
    );
    Ok(snapshot)
}

/// Read and parse a snapshot file
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` if the file does not exist,
/// `ErrorCode::StorageError` if it cannot be read, and
/// `ErrorCode::InvalidFormat` if its content is not a valid snapshot
pub fn load_snapshot(path: &Path) -> AppResult<DayStoreSnapshot> {
    let json = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Snapshot file {}", path.display())).with_source(e)
        } else {
            AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
        }
    })?;

    let snapshot = parse_snapshot(&json)?;
    info!(path = %path.display(), days = snapshot.days.len(), "Loaded day store snapshot");
    Ok(snapshot)
}
