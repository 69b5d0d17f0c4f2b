//! Chunked batch ingestion
//!
//! A dataset file is streamed through a [`FilePipeline`]; parsed records
//! collect in a buffer of at most `chunk_size` records. Each full buffer is
//! merged into the repository and flushed before the next record is read,
//! and the final partial buffer is committed the same way.
//!
//! ## Trade-offs
//!
//! - Peak memory is O(chunk_size) for the buffer, independent of file size.
//! - A crash mid-ingestion loses at most the open chunk; earlier chunks are
//!   already on disk.
//! - Every commit rewrites the whole repository, so small chunks multiply
//!   I/O.

use std::path::Path;
use std::time::{Duration, Instant};

use fleet_core::{Record, RecordValidator};
use fleet_durability::StorageBackend;
use fleet_storage::FilePipeline;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::repository::Repository;

/// Chunk size used when the caller has no preference
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound on the buffer pre-allocation for very large chunk sizes
const MAX_PREALLOCATED: usize = 64 * 1024;

/// Outcome of one [`BatchIngestor::ingest`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchMetrics {
    /// Records parsed and merged; quarantined lines are not counted
    pub processed_records: usize,
    /// Chunks committed, the final partial chunk included
    pub batches: usize,
    /// Lines skipped as malformed
    pub quarantined: usize,
    /// Wall-clock time of the whole call
    pub duration: Duration,
}

impl BatchMetrics {
    /// Processed records per second of wall-clock time
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.processed_records as f64 / secs
        } else {
            0.0
        }
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Processed {} records in {} batches ({} ms, {} quarantined)",
            self.processed_records,
            self.batches,
            self.duration.as_millis(),
            self.quarantined
        )
    }
}

/// Streams dataset files into a [`Repository`] in fixed-size chunks
///
/// The ingestor borrows the repository for its lifetime; it never owns it.
pub struct BatchIngestor<'a, B> {
    repository: &'a mut Repository<B>,
    validator: RecordValidator,
}

impl<'a, B: StorageBackend> BatchIngestor<'a, B> {
    /// Create an ingestor committing into `repository`
    pub fn new(repository: &'a mut Repository<B>, validator: RecordValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Ingest the dataset at `path`, committing every `chunk_size` records
    ///
    /// Fails with [`EngineError::InvalidArgument`] before reading anything
    /// when `chunk_size` is zero. A storage failure aborts the ingestion;
    /// chunks committed before it stay committed.
    pub fn ingest(
        &mut self,
        path: impl AsRef<Path>,
        chunk_size: usize,
    ) -> EngineResult<BatchMetrics> {
        if chunk_size == 0 {
            return Err(EngineError::InvalidArgument(
                "chunk size must be greater than zero".to_string(),
            ));
        }

        let path = path.as_ref();
        let start = Instant::now();
        let pipeline = FilePipeline::new(path, self.validator);
        if !path.exists() {
            warn!("Ingestion source {} does not exist", path.display());
        }

        let repository = &mut *self.repository;
        let mut buffer: Vec<Record> = Vec::with_capacity(chunk_size.min(MAX_PREALLOCATED));
        let mut batches = 0usize;

        let stats = pipeline.stream(|record| {
            buffer.push(record);
            if buffer.len() >= chunk_size {
                commit(repository, &mut buffer)?;
                batches += 1;
                debug!("Committed batch {} from {}", batches, path.display());
            }
            Ok::<_, EngineError>(())
        })?;

        if !buffer.is_empty() {
            commit(repository, &mut buffer)?;
            batches += 1;
            debug!("Committed final batch {} from {}", batches, path.display());
        }

        let metrics = BatchMetrics {
            processed_records: stats.records,
            batches,
            quarantined: stats.quarantined,
            duration: start.elapsed(),
        };
        info!("{} from {}", metrics.summary(), path.display());
        Ok(metrics)
    }
}

fn commit<B: StorageBackend>(
    repository: &mut Repository<B>,
    buffer: &mut Vec<Record>,
) -> EngineResult<()> {
    repository.bulk_upsert(buffer.drain(..));
    repository.flush()?;
    Ok(())
}
