//! Core types for fleetdb
//!
//! This crate defines the inventory data model shared by every layer:
//! - [`Record`]: one vehicle in the inventory
//! - [`Condition`]: the enumerated vehicle conditions
//! - [`RecordValidator`]: the pure invariant check applied before anything
//!   is persisted
//! - [`ValidationError`]: which invariant a record violates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod validation;

pub use error::{ValidationError, ValidationResult};
pub use record::{rented_status, Condition, Record, AVAILABLE};
pub use validation::{RecordValidator, RESERVED_CHARS};
