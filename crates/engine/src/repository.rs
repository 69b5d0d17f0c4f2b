//! Id-keyed record repository with deferred writes
//!
//! The repository exclusively owns the in-memory record set. It is filled
//! from the backend on [`Repository::open`] / [`Repository::reload`],
//! mutated in memory, and written back only by [`Repository::flush`].
//!
//! ## Dirty Tracking
//!
//! | Operation | dirty afterwards |
//! |-----------|------------------|
//! | reload | false |
//! | upsert / insert_checked | true |
//! | update (id present) | true |
//! | update (id absent) | unchanged |
//! | bulk_upsert (non-empty) | true |
//! | bulk_upsert (empty) | unchanged |
//! | flush (success) | false |
//! | flush (failure) | true |
//! | commit_record | unchanged on failure, false on success |
//!
//! A flush validates every record before the backend sees any of them, so
//! no backend ever stores an invalid record. Each flush persists the full
//! record set, so its cost grows with the size of the repository, not with
//! the number of pending changes.

use std::collections::BTreeMap;

use fleet_core::{Record, RecordValidator};
use fleet_durability::StorageBackend;
use tracing::{debug, info};

use crate::error::EngineResult;

/// In-memory record index over a [`StorageBackend`]
///
/// Records are keyed by id; inserting an existing id overwrites it.
/// Listings are ordered by id ascending.
pub struct Repository<B = Box<dyn StorageBackend>> {
    backend: B,
    records: BTreeMap<String, Record>,
    dirty: bool,
    validator: RecordValidator,
}

impl<B: StorageBackend> Repository<B> {
    /// Create a repository and load it from `backend`
    pub fn open(backend: B) -> EngineResult<Self> {
        let mut repository = Self {
            backend,
            records: BTreeMap::new(),
            dirty: false,
            validator: RecordValidator::new(),
        };
        repository.reload()?;
        Ok(repository)
    }

    /// Discard the in-memory index and rebuild it from the backend
    ///
    /// Duplicate ids in the source resolve to the last occurrence. Pending
    /// changes are dropped. On error the in-memory index is left as it was.
    pub fn reload(&mut self) -> EngineResult<()> {
        let loaded = self.backend.load_cars()?;
        let total = loaded.len();

        let mut records = BTreeMap::new();
        for record in loaded {
            records.insert(record.id.clone(), record);
        }

        if records.len() < total {
            debug!(
                "Collapsed {} duplicate ids while loading {}",
                total - records.len(),
                self.backend.name()
            );
        }
        info!("Loaded {} records from {}", records.len(), self.backend.name());

        self.records = records;
        self.dirty = false;
        Ok(())
    }

    /// Every record, ordered by id
    pub fn all(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Records whose status is exactly `Available`, ordered by id
    pub fn available(&self) -> Vec<Record> {
        self.records
            .values()
            .filter(|record| record.is_available())
            .cloned()
            .collect()
    }

    /// Look up a record by id
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Insert or overwrite a record by id
    ///
    /// The record is not validated here; an invalid record makes the next
    /// [`flush`](Self::flush) fail instead of reaching disk. Use
    /// [`insert_checked`](Self::insert_checked) to reject it up front.
    pub fn upsert(&mut self, record: Record) {
        self.records.insert(record.id.clone(), record);
        self.dirty = true;
    }

    /// Validate `record`, then upsert it
    pub fn insert_checked(
        &mut self,
        record: Record,
        validator: &RecordValidator,
    ) -> EngineResult<()> {
        validator.check(&record)?;
        self.upsert(record);
        Ok(())
    }

    /// Apply `mutator` to the record at `id` in place
    ///
    /// Returns false without side effects when `id` is absent. The id is the
    /// record's identity: a mutator that changes it is overridden.
    pub fn update<F>(&mut self, id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Record),
    {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };
        mutator(record);
        if record.id != id {
            record.id = id.to_string();
        }
        self.dirty = true;
        true
    }

    /// Upsert every record in one pass
    pub fn bulk_upsert<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        let mut any = false;
        for record in records {
            self.records.insert(record.id.clone(), record);
            any = true;
        }
        self.dirty |= any;
    }

    /// Upsert `record` and flush it as one step
    ///
    /// If validation or the flush fails, the record previously stored under
    /// the same id (or its absence) and the dirty flag are restored, so the
    /// in-memory index still matches what the backend holds.
    pub fn commit_record(&mut self, record: Record) -> EngineResult<()> {
        self.validator.check(&record)?;

        let id = record.id.clone();
        let was_dirty = self.dirty;
        let previous = self.records.insert(id.clone(), record);
        self.dirty = true;

        if let Err(e) = self.flush() {
            match previous {
                Some(previous) => self.records.insert(id, previous),
                None => self.records.remove(&id),
            };
            self.dirty = was_dirty;
            return Err(e);
        }
        Ok(())
    }

    /// Persist the full record set if anything changed since the last
    /// successful flush or reload
    ///
    /// Every record is validated first. Returns whether the backend was
    /// written. On error the repository stays dirty and the backend keeps
    /// its previous contents.
    pub fn flush(&mut self) -> EngineResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let snapshot = self.all();
        for record in &snapshot {
            self.validator.check(record)?;
        }
        self.backend.persist_cars(&snapshot)?;
        self.dirty = false;
        debug!("Flushed {} records to {}", snapshot.len(), self.backend.name());
        Ok(true)
    }

    /// Number of records in the index
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Check if the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether there are mutations not yet flushed
    pub fn pending_changes(&self) -> bool {
        self.dirty
    }

    /// Diagnostic identity of the backend
    pub fn backend_name(&self) -> String {
        self.backend.name()
    }

    /// The backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give up the repository and return its backend, unflushed changes
    /// included in neither
    pub fn into_backend(self) -> B {
        self.backend
    }
}
