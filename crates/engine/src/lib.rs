//! Engine layer for fleetdb
//!
//! This crate holds the authoritative in-memory record set and everything
//! that mutates it:
//! - [`Repository`]: id-keyed index with deferred writes (dirty + flush)
//! - [`BatchIngestor`]: chunked, streaming ingestion of dataset files
//! - [`RentalService`]: add, rent, return and list operations on top of a
//!   repository
//!
//! # Durability
//!
//! Only [`Repository::flush`] touches the backend. Every other mutation is
//! in memory until the next successful flush.
//!
//! ```text
//! dataset file -> FilePipeline -> BatchIngestor (chunk) -> Repository
//!                                                              |
//!                                                    flush: persist all()
//!                                                              v
//!                                                       StorageBackend
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ingest;
pub mod rental;
pub mod repository;

pub use error::{EngineError, EngineResult};
pub use ingest::{BatchIngestor, BatchMetrics, DEFAULT_CHUNK_SIZE};
pub use rental::RentalService;
pub use repository::Repository;
