//! Validation errors for inventory records

use thiserror::Error;

/// A record violates one of the data-model invariants.
///
/// Each variant names exactly one violated invariant so callers can report
/// the offending field. The first violation found wins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The identifier is empty
    #[error("record id must not be empty")]
    EmptyId,

    /// The model name is empty
    #[error("model of record '{id}' must not be empty")]
    EmptyModel {
        /// Id of the offending record
        id: String,
    },

    /// A text field contains the delimiter or a line break
    #[error("field '{field}' of record '{id}' contains a delimiter or line break")]
    Unrepresentable {
        /// Id of the offending record
        id: String,
        /// Name of the offending field
        field: &'static str,
    },

    /// The condition token is not one of the enumerated conditions
    #[error("unknown condition '{condition}' for record '{id}'")]
    UnknownCondition {
        /// Id of the offending record
        id: String,
        /// The rejected condition token
        condition: String,
    },

    /// The daily price is not a finite positive number
    #[error("price per day of record '{id}' must be finite and positive, got {price}")]
    InvalidPrice {
        /// Id of the offending record
        id: String,
        /// The rejected price
        price: f64,
    },
}

/// Result type for validation checks
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
