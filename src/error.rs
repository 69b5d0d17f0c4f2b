//! Unified error types for fleetdb.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All fleetdb errors.
///
/// This is the canonical error type for all fleetdb operations.
/// It provides a clean, stable interface that hides internal error details.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is structurally invalid (zero chunk size, bad config)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record violates a data-model invariant
    #[error("validation error: {0}")]
    Validation(String),

    /// A line could not be parsed into a record
    #[error("parse error: {0}")]
    Parse(String),

    /// A file could not be read, written or replaced
    #[error("I/O error: {0}")]
    Io(String),

    /// No car with the given id
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation conflicts with current state (duplicate id, car rented)
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Result type for fleetdb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

// Convert from storage errors
impl From<fleet_storage::StorageError> for Error {
    fn from(e: fleet_storage::StorageError) -> Self {
        use fleet_storage::StorageError;
        match e {
            StorageError::Io { .. } => Error::Io(e.to_string()),
            StorageError::Encode(v) => Error::Validation(v.to_string()),
            StorageError::Parse(p) => Error::Parse(p.to_string()),
        }
    }
}

// Convert from engine errors
impl From<fleet_engine::EngineError> for Error {
    fn from(e: fleet_engine::EngineError) -> Self {
        use fleet_engine::EngineError;
        match e {
            EngineError::InvalidArgument(msg) => Error::InvalidArgument(msg),
            EngineError::Validation(v) => Error::Validation(v.to_string()),
            EngineError::Storage(s) => Error::from(s),
            EngineError::Config(c) => Error::InvalidArgument(c.to_string()),
            EngineError::DuplicateId(_) | EngineError::NotAvailable { .. } => {
                Error::Conflict(e.to_string())
            }
            EngineError::NotFound(id) => Error::NotFound(id),
        }
    }
}

// Convert from validation errors
impl From<fleet_core::ValidationError> for Error {
    fn from(e: fleet_core::ValidationError) -> Self {
        Error::Validation(e.to_string())
    }
}

// Convert from backend configuration errors
impl From<fleet_durability::ConfigError> for Error {
    fn from(e: fleet_durability::ConfigError) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}
