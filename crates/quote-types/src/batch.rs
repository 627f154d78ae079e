use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::GeometryRecord;

/// Records produced by the most recent upload, in upload order.
///
/// A new upload replaces the whole batch before any record is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryBatch {
    pub batch_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub records: Vec<GeometryRecord>,
}

impl GeometryBatch {
    /// Open an empty batch with a fresh id and the current timestamp.
    pub fn new() -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            created_at: Utc::now(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: GeometryRecord) {
        self.records.push(record);
    }

    pub fn first(&self) -> Option<&GeometryRecord> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&GeometryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeometryRecord> {
        self.records.iter()
    }
}

impl Default for GeometryBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<GeometryRecord> for GeometryBatch {
    fn from_iter<I: IntoIterator<Item = GeometryRecord>>(iter: I) -> Self {
        let mut batch = Self::new();
        batch.records.extend(iter);
        batch
    }
}
