//! File pipeline: streaming reads and atomic bulk writes of a dataset file
//!
//! Reads are line-by-line. A line that fails to parse is quarantined: it is
//! logged with `warn!` and skipped, and the read continues with the next
//! line. Only I/O failures abort a read.
//!
//! Writes serialize every record before the first byte reaches disk, then
//! hand the lines to [`AtomicFileWriter`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use fleet_core::{Record, RecordValidator};
use tracing::{debug, warn};

use crate::atomic::AtomicFileWriter;
use crate::error::{StorageError, StorageResult};
use crate::format::LineCodec;

/// Input buffer capacity for streaming reads
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Counters from one [`FilePipeline::stream`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Lines read, including empty and quarantined ones
    pub lines: usize,
    /// Records handed to the consumer
    pub records: usize,
    /// Lines skipped because they failed to parse
    pub quarantined: usize,
}

/// Reads and writes one dataset file through a [`LineCodec`]
#[derive(Debug, Clone)]
pub struct FilePipeline {
    path: PathBuf,
    codec: LineCodec,
}

impl FilePipeline {
    /// Create a pipeline over `path`
    pub fn new(path: impl Into<PathBuf>, validator: RecordValidator) -> Self {
        Self {
            path: path.into(),
            codec: LineCodec::new(validator),
        }
    }

    /// The dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every valid record, in file order
    ///
    /// A missing file reads as empty.
    pub fn read_all(&self) -> StorageResult<Vec<Record>> {
        let mut records = Vec::new();
        self.stream(|record| {
            records.push(record);
            Ok::<_, StorageError>(())
        })?;
        Ok(records)
    }

    /// Feed every valid record to `consumer`, in file order
    ///
    /// Malformed lines are quarantined. An error from `consumer` or an I/O
    /// error stops the stream and is returned. A missing file streams
    /// nothing.
    pub fn stream<F, E>(&self, mut consumer: F) -> Result<StreamStats, E>
    where
        F: FnMut(Record) -> Result<(), E>,
        E: From<StorageError>,
    {
        let mut stats = StreamStats::default();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, nothing to read", self.path.display());
                return Ok(stats);
            }
            Err(e) => return Err(StorageError::io(&self.path, e).into()),
        };

        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| StorageError::io(&self.path, e))?;
            if read == 0 {
                break;
            }
            stats.lines += 1;

            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    stats.quarantined += 1;
                    warn!(
                        "Skipping line {} of {}: not valid UTF-8 ({})",
                        stats.lines,
                        self.path.display(),
                        e
                    );
                    continue;
                }
            };

            match self.codec.parse(line) {
                Ok(Some(record)) => {
                    stats.records += 1;
                    consumer(record)?;
                }
                Ok(None) => {}
                Err(e) => {
                    stats.quarantined += 1;
                    warn!(
                        "Skipping line {} of {}: {}",
                        stats.lines,
                        self.path.display(),
                        e
                    );
                }
            }
        }

        debug!(
            "Read {} records from {} ({} lines, {} quarantined)",
            stats.records,
            self.path.display(),
            stats.lines,
            stats.quarantined
        );
        Ok(stats)
    }

    /// Atomically replace the file with `records`
    ///
    /// Every record is serialized first; if any is refused nothing is
    /// written and the existing file is untouched.
    pub fn write_all(&self, records: &[Record]) -> StorageResult<()> {
        let lines = records
            .iter()
            .map(|record| self.codec.serialize(record))
            .collect::<Result<Vec<_>, _>>()?;

        AtomicFileWriter::new(&self.path).write(&lines)
    }
}
