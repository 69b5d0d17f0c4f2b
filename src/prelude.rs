//! Convenient imports for fleetdb.
//!
//! ```ignore
//! use fleetdb::prelude::*;
//!
//! let mut fleet = Fleet::open("./cars.txt")?;
//! ```

// Main entry point
pub use crate::database::{Fleet, FleetBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Record model
pub use crate::types::{Condition, Record, RecordValidator, AVAILABLE};

// Configuration
pub use crate::types::{BackendConfig, BackendKind};

// Ingestion
pub use crate::types::{BatchMetrics, DEFAULT_CHUNK_SIZE};
