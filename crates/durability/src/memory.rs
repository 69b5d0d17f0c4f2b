//! In-memory storage
//!
//! Holds the last persisted record set in process memory. Nothing touches
//! disk and everything is lost when the backend is dropped.

use fleet_core::Record;
use fleet_storage::StorageResult;

use crate::backend::StorageBackend;

/// Backend that keeps the last persisted record set in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Vec<Record>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that loads `seed` until the first persist
    pub fn with_records(seed: Vec<Record>) -> Self {
        Self { records: seed }
    }

    /// The record set as last persisted
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl StorageBackend for MemoryBackend {
    fn load_cars(&self) -> StorageResult<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn name(&self) -> String {
        "in-memory".to_string()
    }
}
