//! Storage layer for fleetdb
//!
//! This crate turns records into bytes on disk and back:
//! - `format`: the comma-delimited line format (parse/serialize)
//! - `atomic`: write-temp-then-rename file replacement
//! - `pipeline`: streaming reads with malformed-line quarantine, and
//!   validate-everything-then-write bulk writes
//!
//! Nothing in this crate keeps state between calls; the repository and its
//! backends live in `fleet-durability` and `fleet-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atomic;
pub mod error;
pub mod format;
pub mod pipeline;

pub use atomic::{AtomicFileWriter, StagedFile, WRITE_BUFFER_SIZE};
pub use error::{StorageError, StorageResult};
pub use format::{LineCodec, ParseError};
pub use pipeline::{FilePipeline, StreamStats, READ_BUFFER_SIZE};
