//! Backend selection and flush accounting

use crate::common::*;
use fleetdb::{
    open_backend, BackendConfig, MemoryBackend, RecordValidator, Repository, StorageBackend,
};

#[test]
fn test_memory_backend_reload_through_fresh_repository() {
    let mut repo = Repository::open(MemoryBackend::new()).unwrap();
    repo.upsert(car("car-1", "Sedan", 2000.0));
    repo.update("car-1", |r| r.status = "Rented by user U".to_string());
    repo.flush().unwrap();

    let fresh = Repository::open(repo.into_backend()).unwrap();
    assert_eq!(fresh.find("car-1").unwrap().status, "Rented by user U");
}

#[test]
fn test_repository_borrowing_backend() {
    let mut backend = MemoryBackend::new();
    {
        let mut repo = Repository::open(&mut backend).unwrap();
        repo.bulk_upsert(vec![car("b", "B", 1.0), car("a", "A", 1.0)]);
        repo.flush().unwrap();
    }
    assert_eq!(ids(backend.records()), vec!["a", "b"]);
}

#[test]
fn test_factory_backends_behave_alike() {
    let dir = TestDir::new();
    let configs = [
        BackendConfig::file(dir.inventory()),
        BackendConfig::memory(),
    ];

    for config in configs {
        let backend = open_backend(&config, RecordValidator::new()).unwrap();
        let mut repo: Repository = Repository::open(backend).unwrap();
        assert!(repo.is_empty(), "{}", repo.backend_name());

        repo.bulk_upsert(vec![car("car-2", "B", 2.0), car("car-1", "A", 1.0)]);
        assert!(repo.flush().unwrap());
        assert!(!repo.flush().unwrap());

        let backend: Box<dyn StorageBackend> = repo.into_backend();
        let loaded = backend.load_cars().unwrap();
        assert_eq!(ids(&loaded), vec!["car-1", "car-2"]);
    }
}

#[test]
fn test_file_backend_selected_by_config_survives_reopen() {
    let dir = TestDir::new();
    let config: BackendConfig = BackendConfig::file(dir.inventory());

    let mut repo: Repository =
        Repository::open(open_backend(&config, RecordValidator::new()).unwrap()).unwrap();
    repo.upsert(car("car-1", "Sedan", 2000.0));
    repo.flush().unwrap();
    drop(repo);

    let repo: Repository =
        Repository::open(open_backend(&config, RecordValidator::new()).unwrap()).unwrap();
    assert_eq!(repo.total_records(), 1);
    assert_eq!(repo.backend_name(), format!("file:{}", dir.inventory().display()));
}

#[test]
fn test_no_backend_accepts_an_invalid_record() {
    let dir = TestDir::new();
    let configs = [
        BackendConfig::file(dir.inventory()),
        BackendConfig::memory(),
    ];

    for config in configs {
        let backend = open_backend(&config, RecordValidator::new()).unwrap();
        let mut repo: Repository = Repository::open(backend).unwrap();
        repo.upsert(car("car-1", "Sedan", -5.0));

        let err = repo.flush().unwrap_err();
        assert!(!err.is_io(), "{}", repo.backend_name());
        assert!(repo.pending_changes());

        let backend: Box<dyn StorageBackend> = repo.into_backend();
        assert!(backend.load_cars().unwrap().is_empty(), "{:?}", config.kind);
    }
}
