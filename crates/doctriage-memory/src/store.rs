// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared in-memory log of classification records.
//!
//! Unbounded and process-local. Every clone shares the same
//! underlying list, so the router, the gateway, and tests all observe the
//! same log.

use std::sync::Arc;

use tokio::sync::RwLock;

use doctriage_core::{ClassificationRecord, RecordId};

/// Cheaply clonable handle to the shared classification log.
#[derive(Debug, Clone, Default)]
pub struct RecordLog {
    records: Arc<RwLock<Vec<ClassificationRecord>>>,
}

impl RecordLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the log.
    pub async fn append(&self, record: ClassificationRecord) {
        tracing::debug!(id = %record.id, format = %record.format, intent = %record.intent, "record logged");
        self.records.write().await.push(record);
    }

    /// Returns all records in insertion order.
    pub async fn all(&self) -> Vec<ClassificationRecord> {
        self.records.read().await.clone()
    }

    /// Returns up to `limit` records, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<ClassificationRecord> {
        let records = self.records.read().await;
        records.iter().rev().take(limit).cloned().collect()
    }

    /// Looks up a record by ID.
    pub async fn get(&self, id: &RecordId) -> Option<ClassificationRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    }

    /// Returns the number of records logged so far.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when the log is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Removes all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}
