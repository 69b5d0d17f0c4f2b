//! Main entry point for fleetdb.
//!
//! This module provides the `Fleet` struct, which wires a storage backend,
//! a repository, the batch ingestor and the rental service together.

use std::path::{Path, PathBuf};

use fleet_core::{Record, RecordValidator};
use fleet_durability::{open_backend, BackendConfig, BackendKind, StorageBackend};
use fleet_engine::{BatchIngestor, BatchMetrics, RentalService, Repository};
use tracing::info;

use crate::error::Result;

/// A vehicle inventory.
///
/// Create one with [`Fleet::open`], [`Fleet::ephemeral`] or
/// [`Fleet::builder`].
///
/// # Example
///
/// ```ignore
/// use fleetdb::prelude::*;
///
/// let mut fleet = Fleet::open("./cars.txt")?;
/// fleet.ingest("./dataset.csv", 1024)?;
/// fleet.rentals().rent_car("car-1", "user-7")?;
/// fleet.close()?;
/// ```
pub struct Fleet {
    repository: Repository,
    validator: RecordValidator,
}

impl Fleet {
    /// Open a file-backed inventory at `path`.
    ///
    /// The file is created on the first flush if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create an inventory that lives only in process memory.
    ///
    /// | Method | Disk Files | Survives restart |
    /// |--------|------------|------------------|
    /// | `Fleet::ephemeral()` | None | No |
    /// | `Fleet::open(path)` | `path` | Yes |
    pub fn ephemeral() -> Result<Self> {
        Self::builder().memory().open()
    }

    /// Open the inventory described by `config`.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let validator = RecordValidator::new();
        let backend = open_backend(config, validator)?;
        let repository = Repository::open(backend)?;
        info!(
            "Opened fleet on {} with {} records",
            repository.backend_name(),
            repository.total_records()
        );
        Ok(Self {
            repository,
            validator,
        })
    }

    /// Create a builder for inventory configuration.
    pub fn builder() -> FleetBuilder {
        FleetBuilder::new()
    }

    /// Read access to the repository.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Mutable access to the repository.
    ///
    /// Changes made here are in memory until [`Fleet::flush`].
    pub fn repository_mut(&mut self) -> &mut Repository {
        &mut self.repository
    }

    /// Rental operations for the duration of the returned borrow.
    pub fn rentals(&mut self) -> RentalService<'_, Box<dyn StorageBackend>> {
        RentalService::new(&mut self.repository, self.validator)
    }

    /// Ingest a dataset file in chunks of `chunk_size` records.
    pub fn ingest(&mut self, path: impl AsRef<Path>, chunk_size: usize) -> Result<BatchMetrics> {
        let metrics =
            BatchIngestor::new(&mut self.repository, self.validator).ingest(path, chunk_size)?;
        Ok(metrics)
    }

    /// Persist pending changes. Returns whether anything was written.
    pub fn flush(&mut self) -> Result<bool> {
        Ok(self.repository.flush()?)
    }

    /// Flush pending changes and release the inventory.
    pub fn close(mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }

    /// Diagnostic identity of the backend.
    pub fn backend_name(&self) -> String {
        self.repository.backend_name()
    }
}

/// Builder for inventory configuration.
///
/// # Example
///
/// ```ignore
/// // Durable, file-backed
/// let fleet = Fleet::builder().path("./cars.txt").open()?;
///
/// // Tests: in memory, pre-populated
/// let fleet = Fleet::builder()
///     .memory()
///     .seed(vec![Record::new("car-1", "Atlas", Condition::Good, 1800.0)])
///     .open()?;
/// ```
pub struct FleetBuilder {
    config: BackendConfig,
    seed: Vec<Record>,
}

impl FleetBuilder {
    /// Create a new builder with default settings (file backend on
    /// `cars.txt`).
    pub fn new() -> Self {
        Self {
            config: BackendConfig::default(),
            seed: Vec::new(),
        }
    }

    /// Use a file backend at `path`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config = BackendConfig::file(PathBuf::from(path.as_ref()));
        self
    }

    /// Use a file backend at the configured path.
    pub fn file(mut self) -> Self {
        self.config.kind = BackendKind::File;
        self
    }

    /// Keep records in process memory only.
    pub fn memory(mut self) -> Self {
        self.config.kind = BackendKind::Memory;
        self
    }

    /// Use an explicit backend configuration.
    pub fn config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self
    }

    /// Records merged and flushed right after opening.
    pub fn seed(mut self, records: Vec<Record>) -> Self {
        self.seed = records;
        self
    }

    /// Open the inventory.
    pub fn open(self) -> Result<Fleet> {
        let mut fleet = Fleet::from_config(&self.config)?;
        if !self.seed.is_empty() {
            fleet.rentals().ingest_records(self.seed)?;
        }
        Ok(fleet)
    }
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
