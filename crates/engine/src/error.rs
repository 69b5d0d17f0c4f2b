//! Engine errors

use fleet_core::ValidationError;
use fleet_durability::ConfigError;
use fleet_storage::StorageError;
use thiserror::Error;

/// Errors raised by the repository, the ingestor and the rental service
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller supplied a structurally invalid parameter; no work was done
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record violates a data-model invariant
    #[error("invalid record: {0}")]
    Validation(#[from] ValidationError),

    /// The backend could not load or persist records
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backend configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A record with this id already exists
    #[error("car with id {0} already exists")]
    DuplicateId(String),

    /// No record with this id
    #[error("car {0} not found")]
    NotFound(String),

    /// The record exists but is not available for rent
    #[error("car {id} is not available ({status})")]
    NotAvailable {
        /// Id of the car
        id: String,
        /// Its current status
        status: String,
    },
}

impl EngineError {
    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EngineError::InvalidArgument(_))
    }

    /// Check if this is an I/O failure of the backing storage
    pub fn is_io(&self) -> bool {
        matches!(self, EngineError::Storage(e) if e.is_io())
    }
}

/// Result type for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;
