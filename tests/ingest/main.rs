//! Batch Ingestion Integration Tests
//!
//! - chunk accounting: processed == parseable lines, batches == ceil(N / chunk)
//! - malformed lines are quarantined, never abort the ingestion
//! - committed chunks are on disk before the next chunk is read

#[path = "../common/mod.rs"]
mod common;

use common::*;
use fleetdb::{
    BatchIngestor, FileBackend, FilePipeline, Fleet, MemoryBackend, Record, RecordValidator,
    Repository, StorageBackend, StorageError, StorageResult,
};
use proptest::prelude::*;

#[test]
fn test_thousand_records_in_chunks_of_256() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 1000, 0);

    let mut repo =
        Repository::open(FileBackend::new(dir.inventory(), RecordValidator::new())).unwrap();
    let metrics = BatchIngestor::new(&mut repo, RecordValidator::new())
        .ingest(&source, 256)
        .unwrap();

    assert_eq!(metrics.processed_records, 1000);
    assert_eq!(metrics.batches, 4);
    assert_eq!(metrics.quarantined, 0);
    assert_eq!(repo.total_records(), 1000);
    assert!(!repo.pending_changes());

    let on_disk = FilePipeline::new(dir.inventory(), RecordValidator::new())
        .read_all()
        .unwrap();
    assert_eq!(on_disk.len(), 1000);
}

#[test]
fn test_zero_chunk_size_reads_nothing() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 10, 0);

    let mut fleet = Fleet::ephemeral().unwrap();
    let err = fleet.ingest(&source, 0).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(fleet.repository().total_records(), 0);
    assert!(!fleet.repository().pending_changes());
}

#[test]
fn test_malformed_lines_are_quarantined() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 500, 37);

    let mut fleet = Fleet::ephemeral().unwrap();
    let metrics = fleet.ingest(&source, 64).unwrap();

    assert_eq!(metrics.processed_records, 500);
    assert_eq!(metrics.quarantined, 37);
    assert_eq!(metrics.batches, 8);
    assert_eq!(fleet.repository().total_records(), 500);
}

#[test]
fn test_ingest_into_file_fleet_then_rent() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 1000, 0);

    let mut fleet = Fleet::open(dir.inventory()).unwrap();
    let metrics = fleet.ingest(&source, 256).unwrap();
    assert_eq!(metrics.processed_records, 1000);
    assert!(metrics.batches > 0);

    let first = fleet.repository().all().remove(0);
    let due = fleet.rentals().rent_car(&first.id, "integration-user").unwrap();
    assert_eq!(due, first.price_per_day);
    fleet.rentals().return_car(&first.id).unwrap();
    fleet.close().unwrap();

    let fleet = Fleet::open(dir.inventory()).unwrap();
    assert_eq!(fleet.repository().total_records(), 1000);
    assert!(fleet.repository().find(&first.id).unwrap().is_available());
}

/// Memory backend that fails every persist after the first `allow`
struct FailingAfter {
    inner: MemoryBackend,
    allow: usize,
    persists: usize,
}

impl StorageBackend for FailingAfter {
    fn load_cars(&self) -> StorageResult<Vec<Record>> {
        self.inner.load_cars()
    }

    fn persist_cars(&mut self, records: &[Record]) -> StorageResult<()> {
        self.persists += 1;
        if self.persists > self.allow {
            return Err(StorageError::io(
                "failing",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        self.inner.persist_cars(records)
    }

    fn name(&self) -> String {
        "failing".to_string()
    }
}

#[test]
fn test_crash_loses_only_the_open_chunk() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 100, 0);

    let backend = FailingAfter {
        inner: MemoryBackend::new(),
        allow: 2,
        persists: 0,
    };
    let mut repo = Repository::open(backend).unwrap();
    let err = BatchIngestor::new(&mut repo, RecordValidator::new())
        .ingest(&source, 30)
        .unwrap_err();
    assert!(err.is_io());

    // Two chunks reached the backend; the third failed and is not durable
    let backend = repo.into_backend();
    assert_eq!(backend.persists, 3);
    assert_eq!(backend.inner.records().len(), 60);
}

#[test]
fn test_reingesting_same_file_is_idempotent() {
    let dir = TestDir::new();
    let source = dir.path("dataset.csv");
    write_dataset(&source, 300, 5);

    let mut fleet = Fleet::open(dir.inventory()).unwrap();
    fleet.ingest(&source, 100).unwrap();
    let before = std::fs::read(dir.inventory()).unwrap();

    let metrics = fleet.ingest(&source, 100).unwrap();
    assert_eq!(metrics.processed_records, 300);
    assert_eq!(fleet.repository().total_records(), 300);
    assert_eq!(std::fs::read(dir.inventory()).unwrap(), before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_chunking_conserves_records(
        good in 0usize..300,
        bad in 0usize..20,
        chunk in 1usize..80,
    ) {
        let dir = TestDir::new();
        let source = dir.path("dataset.csv");
        write_dataset(&source, good, bad);

        let mut repo = Repository::open(MemoryBackend::new()).unwrap();
        let metrics = BatchIngestor::new(&mut repo, RecordValidator::new())
            .ingest(&source, chunk)
            .unwrap();

        prop_assert_eq!(metrics.processed_records, good);
        prop_assert_eq!(metrics.quarantined, bad);
        prop_assert_eq!(metrics.batches, (good + chunk - 1) / chunk);
        prop_assert_eq!(repo.backend().records().len(), good);
    }
}
