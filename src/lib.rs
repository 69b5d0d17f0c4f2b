//! # fleetdb
//!
//! Durable vehicle inventory store.
//!
//! fleetdb keeps an id-keyed set of vehicle records in memory, persists it
//! with atomic whole-file replacement, and loads large datasets in bounded
//! chunks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fleetdb::prelude::*;
//!
//! // Open (or create) an inventory file
//! let mut fleet = Fleet::open("./cars.txt")?;
//!
//! // Bulk-load a dataset in chunks of 4096 records
//! let metrics = fleet.ingest("./dataset.csv", DEFAULT_CHUNK_SIZE)?;
//! println!("{}", metrics.summary());
//!
//! // Rent a car; the change is flushed before this returns
//! let due = fleet.rentals().rent_car("car-1", "user-7")?;
//!
//! // Direct repository access for reads and deferred writes
//! fleet.repository_mut().upsert(Record::new("car-9", "Atlas", Condition::Good, 2100.0));
//! fleet.flush()?;
//! ```
//!
//! ## Layers
//!
//! - `fleet-core` - [`Record`], [`Condition`], [`RecordValidator`]
//! - `fleet-storage` - line codec, atomic writer, file pipeline
//! - `fleet-durability` - file and memory backends, [`BackendConfig`]
//! - `fleet-engine` - [`Repository`], [`BatchIngestor`], [`RentalService`]

#![warn(missing_docs)]

mod database;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use database::{Fleet, FleetBuilder};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
