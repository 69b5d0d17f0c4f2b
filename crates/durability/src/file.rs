//! File-backed storage

use std::path::{Path, PathBuf};

use fleet_core::{Record, RecordValidator};
use fleet_storage::{FilePipeline, StorageResult};
use tracing::debug;

use crate::backend::StorageBackend;

/// Backend over a single dataset file
///
/// Every persist rewrites the whole file through an atomic replace, so the
/// file always holds either the previous or the new record set.
#[derive(Debug, Clone)]
pub struct FileBackend {
    pipeline: FilePipeline,
}

impl FileBackend {
    /// Create a backend over `path`; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>, validator: RecordValidator) -> Self {
        Self {
            pipeline: FilePipeline::new(path, validator),
        }
    }

    /// The dataset file
    pub fn path(&self) -> &Path {
        self.pipeline.path()
    }
}

impl StorageBackend for FileBackend {
    fn load_cars(&self) -> StorageResult<Vec<Record>> {
        let records = self.pipeline.read_all()?;
        debug!("Loaded {} records from {}", records.len(), self.name());
        Ok(records)
    }

    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()> {
        self.pipeline.write_all(records)?;
        debug!("Persisted {} records to {}", records.len(), self.name());
        Ok(())
    }

    fn name(&self) -> String {
        format!("file:{}", self.pipeline.path().display())
    }
}
