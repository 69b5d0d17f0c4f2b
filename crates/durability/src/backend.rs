//! Storage backend capability

use fleet_core::Record;
use fleet_storage::StorageResult;

/// Durable home of a record set
///
/// A backend is a bulk store: it hands back everything it holds and
/// replaces everything on persist. The repository owns the authoritative
/// in-memory copy once loaded; the backend is never consulted as a second
/// source of truth.
///
/// Code outside [`open_backend`](crate::open_backend) never checks which
/// implementation it is talking to.
pub trait StorageBackend {
    /// Load every stored record
    fn load_cars(&self) -> StorageResult<Vec<Record>>;

    /// Replace the stored record set with `records`
    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()>;

    /// Diagnostic identity, e.g. `file:cars.txt` or `in-memory`
    fn name(&self) -> String;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn load_cars(&self) -> StorageResult<Vec<Record>> {
        (**self).load_cars()
    }

    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()> {
        (**self).persist_cars(records)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &mut B {
    fn load_cars(&self) -> StorageResult<Vec<Record>> {
        (**self).load_cars()
    }

    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()> {
        (**self).persist_cars(records)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
