// ABOUTME: Single-entry daily menu cache keyed by the total calorie target
// ABOUTME: Freshness checks under one read lock, snapshot I/O performed outside the lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use super::snapshot::{read_snapshot, write_snapshot, CacheSnapshot};
use super::{CacheConfig, RestoreOutcome};
use crate::errors::AppResult;
use crate::menus::{check_daily_menu_set, DailyMenuSet};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// The cached day of menus
#[derive(Debug, Clone)]
struct CacheEntry {
    menu_set: DailyMenuSet,
    total_calories: u32,
    created_at: DateTime<Utc>,
    /// Freshness window: `fresh_ttl` for generated sets, `snapshot_ttl` for restored ones
    ttl: Duration,
}

impl CacheEntry {
    fn new(menu_set: DailyMenuSet, total_calories: u32, ttl: Duration) -> Self {
        Self {
            menu_set,
            total_calories,
            created_at: Utc::now(),
            ttl,
        }
    }

    /// Time since creation; timestamps in the future count as zero
    fn age(&self) -> Duration {
        (Utc::now() - self.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Holds at most one generated day of menus
///
/// A `put` replaces the entry wholesale, last writer wins. The entry answers
/// `get` only for the same calorie total and only while younger than its
/// TTL: the freshness TTL for generated sets, the snapshot TTL for a set
/// restored from disk.
///
/// Snapshot writes are serialized by `persist_lock`; at most one temporary
/// snapshot file exists at a time.
#[derive(Debug)]
pub struct MealsCache {
    entry: RwLock<Option<CacheEntry>>,
    persist_lock: Mutex<()>,
    config: CacheConfig,
}

impl MealsCache {
    /// Create an empty cache
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entry: RwLock::new(None),
            persist_lock: Mutex::new(()),
            config,
        }
    }

    /// Cached menus for `total_calories`, if present and fresh
    pub async fn get(&self, total_calories: u32) -> Option<DailyMenuSet> {
        let guard = self.entry.read().await;
        let Some(entry) = guard.as_ref() else {
            debug!(total_calories, "Meals cache miss (empty)");
            return None;
        };

        if entry.total_calories != total_calories {
            debug!(
                total_calories,
                cached = entry.total_calories,
                "Meals cache miss (different target)"
            );
            return None;
        }

        if entry.age() >= entry.ttl {
            debug!(total_calories, "Meals cache miss (expired)");
            return None;
        }

        debug!(total_calories, "Meals cache hit");
        Some(entry.menu_set.clone())
    }

    /// Replace the cached entry, stamping it with the current time
    pub async fn put(&self, total_calories: u32, menu_set: DailyMenuSet) {
        let entry = CacheEntry::new(menu_set, total_calories, self.config.fresh_ttl);
        *self.entry.write().await = Some(entry);
        debug!(total_calories, "Stored daily menus in cache");
    }

    /// Drop the cached entry
    pub async fn clear(&self) {
        *self.entry.write().await = None;
    }

    /// Calorie total of the cached entry, fresh or not
    pub async fn current_key(&self) -> Option<u32> {
        self.entry.read().await.as_ref().map(|e| e.total_calories)
    }

    /// Write the current entry to the snapshot file
    ///
    /// Does nothing when persistence is disabled or the cache is empty.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the snapshot cannot be written
    pub async fn persist(&self) -> AppResult<()> {
        let Some(path) = self.config.snapshot_path.as_deref() else {
            return Ok(());
        };

        // Held across the read and the write so the newest entry lands last
        let _persist_guard = self.persist_lock.lock().await;
        let snapshot = {
            let guard = self.entry.read().await;
            let Some(entry) = guard.as_ref() else {
                debug!("Meals cache empty, nothing to persist");
                return Ok(());
            };
            CacheSnapshot::new(
                entry.menu_set.clone(),
                entry.total_calories,
                entry.created_at,
            )
        };

        write_snapshot(path, &snapshot).await
    }

    /// Load the snapshot file into memory if it is recent enough
    ///
    /// `Stale` and `NotFound` leave the current entry untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the file exists but cannot
    /// be read or parsed, and an invalid-format error if a meal in it is empty
    /// or holds a dish without a name or with a negative value. The current
    /// entry is left untouched in every error case.
    pub async fn restore(&self) -> AppResult<RestoreOutcome> {
        let Some(path) = self.config.snapshot_path.as_deref() else {
            return Ok(RestoreOutcome::NotFound);
        };

        let Some(snapshot) = read_snapshot(path).await? else {
            debug!(path = %path.display(), "No meals cache snapshot");
            return Ok(RestoreOutcome::NotFound);
        };

        check_daily_menu_set(&snapshot.data)?;

        let Some(created_at) = snapshot.created_at() else {
            return Ok(RestoreOutcome::Stale);
        };
        let entry = CacheEntry {
            menu_set: snapshot.data,
            total_calories: snapshot.total_calories,
            created_at,
            ttl: self.config.snapshot_ttl,
        };

        if entry.age() >= entry.ttl {
            info!(
                path = %path.display(),
                age_secs = entry.age().as_secs(),
                "Meals cache snapshot is stale, ignoring"
            );
            return Ok(RestoreOutcome::Stale);
        }

        info!(
            path = %path.display(),
            total_calories = entry.total_calories,
            "Restored meals cache from snapshot"
        );
        *self.entry.write().await = Some(entry);
        Ok(RestoreOutcome::Restored)
    }
}

impl Default for MealsCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
