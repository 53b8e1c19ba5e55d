//! Voice activity tracking persisted as JSON
//!
//! Voice time accumulates in memory as members join and leave; the save
//! command writes a snapshot to disk.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ActivityTracker;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub total_seconds: i64,
    /// Start of the voice session in progress, if any
    #[serde(skip)]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    users: BTreeMap<u64, ActivityRecord>,
}

pub struct JsonActivityTracker {
    path: PathBuf,
    records: DashMap<u64, ActivityRecord>,
}

impl JsonActivityTracker {
    /// Resume from an existing snapshot at `path`, or start empty
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = DashMap::new();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading activity data from {}", path.display()))?;
            let snapshot: Snapshot = serde_json::from_str(&contents)
                .with_context(|| format!("parsing activity data in {}", path.display()))?;
            info!(
                "Loaded activity for {} users (saved {})",
                snapshot.users.len(),
                snapshot.saved_at
            );
            for (user_id, record) in snapshot.users {
                records.insert(user_id, record);
            }
        }

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_join(&self, user_id: u64, at: DateTime<Utc>) {
        let mut record = self.records.entry(user_id).or_default();
        if record.joined_at.is_none() {
            record.joined_at = Some(at);
        }
    }

    pub fn record_leave(&self, user_id: u64, at: DateTime<Utc>) {
        if let Some(mut record) = self.records.get_mut(&user_id) {
            if let Some(joined) = record.joined_at.take() {
                record.total_seconds += (at - joined).num_seconds().max(0);
            }
        }
    }

    /// Accumulated seconds, counting an in-progress session up to `now`
    pub fn total_seconds(&self, user_id: u64, now: DateTime<Utc>) -> i64 {
        self.records
            .get(&user_id)
            .map(|record| settled(&record, now).total_seconds)
            .unwrap_or(0)
    }

    async fn write_snapshot(&self, users: BTreeMap<u64, ActivityRecord>) -> Result<()> {
        let snapshot = Snapshot {
            saved_at: Utc::now(),
            users,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing activity data to {}", self.path.display()))?;
        Ok(())
    }
}

fn settled(record: &ActivityRecord, now: DateTime<Utc>) -> ActivityRecord {
    let ongoing = record
        .joined_at
        .map(|joined| (now - joined).num_seconds().max(0))
        .unwrap_or(0);
    ActivityRecord {
        total_seconds: record.total_seconds + ongoing,
        joined_at: None,
    }
}

#[async_trait]
impl ActivityTracker for JsonActivityTracker {
    async fn save_activity_data(&self) -> Result<()> {
        let now = Utc::now();
        let users: BTreeMap<u64, ActivityRecord> = self
            .records
            .iter()
            .map(|entry| (*entry.key(), settled(entry.value(), now)))
            .collect();
        let count = users.len();
        self.write_snapshot(users).await?;
        info!("Saved activity for {count} users to {}", self.path.display());
        Ok(())
    }

    async fn clear_and_reinitialize_activity_data(&self) -> Result<()> {
        let now = Utc::now();
        // Members still in voice keep tracking from now on
        self.records.retain(|_, record| record.joined_at.is_some());
        for mut entry in self.records.iter_mut() {
            entry.total_seconds = 0;
            entry.joined_at = Some(now);
        }
        debug!("{} active voice sessions carried over", self.records.len());
        self.write_snapshot(BTreeMap::new()).await?;
        info!("Activity data reset at {}", self.path.display());
        Ok(())
    }
}
