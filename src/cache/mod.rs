// ABOUTME: Daily menu cache with a freshness window and an on-disk snapshot
// ABOUTME: Configuration and restore outcomes shared by the memory and snapshot layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

/// Single-entry in-memory cache
pub mod memory;
/// Snapshot file format and atomic file I/O
pub mod snapshot;

use crate::constants::cache::{DEFAULT_SNAPSHOT_PATH, TTL_MEALS_SECS, TTL_SNAPSHOT_SECS};
use std::path::PathBuf;
use std::time::Duration;

pub use memory::MealsCache;
pub use snapshot::CacheSnapshot;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long an in-memory entry answers `get` (default: 1 hour)
    pub fresh_ttl: Duration,
    /// Maximum snapshot age accepted by `restore` (default: 24 hours)
    pub snapshot_ttl: Duration,
    /// Snapshot file location, `None` disables persistence
    pub snapshot_path: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            fresh_ttl: Duration::from_secs(TTL_MEALS_SECS),
            snapshot_ttl: Duration::from_secs(TTL_SNAPSHOT_SECS),
            snapshot_path: Some(PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
        }
    }
}

impl CacheConfig {
    /// Configuration without a snapshot file
    #[must_use]
    pub fn in_memory_only() -> Self {
        Self {
            snapshot_path: None,
            ..Self::default()
        }
    }
}

/// Result of loading the snapshot at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Snapshot was recent enough and is now the in-memory entry
    Restored,
    /// Snapshot exists but is older than the snapshot TTL
    Stale,
    /// No snapshot file (or persistence disabled)
    NotFound,
}
