//! Public types for the fleetdb API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Record model
pub use fleet_core::{rented_status, Condition, Record, RecordValidator, AVAILABLE};

// Storage building blocks
pub use fleet_storage::{
    AtomicFileWriter, FilePipeline, LineCodec, StorageError, StorageResult, StreamStats,
};

// Backends and their configuration
pub use fleet_durability::{
    open_backend, BackendConfig, BackendKind, FileBackend, MemoryBackend, StorageBackend,
    DEFAULT_DATA_FILE,
};

// Engine
pub use fleet_engine::{
    BatchIngestor, BatchMetrics, RentalService, Repository, DEFAULT_CHUNK_SIZE,
};
