//! Storage errors

use std::io;
use std::path::{Path, PathBuf};

use fleet_core::ValidationError;
use thiserror::Error;

use crate::format::ParseError;

/// Errors raised by the storage layer
///
/// `Io` always carries the file it concerns. It means the durability
/// guarantee cannot be met and is never swallowed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file could not be opened, created, written, synced or renamed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A record was refused by the codec; nothing was written
    #[error("refusing to write record: {0}")]
    Encode(#[from] ValidationError),

    /// A single line failed to parse at an API boundary
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl StorageError {
    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, StorageError::Io { .. })
    }
}

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;
