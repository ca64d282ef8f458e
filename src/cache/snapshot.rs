// ABOUTME: On-disk snapshot of the cached daily menus written via temp file and rename
// ABOUTME: Format is {"data", "timestamp" (epoch seconds), "total_calories"}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use crate::errors::{AppError, AppResult};
use crate::menus::DailyMenuSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Snapshot file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// Cached menus
    pub data: DailyMenuSet,
    /// Creation time in fractional seconds since the Unix epoch
    pub timestamp: f64,
    /// Daily calorie total the menus were generated for
    pub total_calories: u32,
}

impl CacheSnapshot {
    /// Build a snapshot stamped with `created_at`
    #[must_use]
    pub fn new(data: DailyMenuSet, total_calories: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: created_at.timestamp_millis() as f64 / 1000.0,
            total_calories,
        }
    }

    /// Creation time, `None` when the timestamp is out of range
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis((self.timestamp * 1000.0).round() as i64)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write the snapshot atomically
///
/// 1. Write to `<path>.tmp`
/// 2. Rename to `<path>`
///
/// # Errors
///
/// Returns a storage error if the directory, temp file or rename fails
pub async fn write_snapshot(path: &Path, snapshot: &CacheSnapshot) -> AppResult<()> {
    let bytes = serde_json::to_vec(snapshot)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, &bytes)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).await.map_err(|e| {
        AppError::storage(format!("Failed to move snapshot to {}: {e}", path.display()))
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote meals cache snapshot");
    Ok(())
}

/// Read the snapshot, `Ok(None)` when the file does not exist
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization
/// error if its contents are not a snapshot
pub async fn read_snapshot(path: &Path) -> AppResult<Option<CacheSnapshot>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let snapshot = serde_json::from_slice(&bytes).map_err(|e| {
        AppError::serialization(format!("Invalid snapshot {}: {e}", path.display()))
    })?;
    Ok(Some(snapshot))
}
