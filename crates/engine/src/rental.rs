//! Rental operations over a repository
//!
//! Each operation that changes the inventory flushes before returning, so a
//! successful call is durable as far as the backend is. A failed call leaves
//! the car as it was, in memory and on the backend.

use fleet_core::{rented_status, Record, RecordValidator, AVAILABLE};
use fleet_durability::StorageBackend;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::repository::Repository;

/// Add, rent, return and list cars
///
/// Borrows the repository for the length of a session.
pub struct RentalService<'a, B> {
    repository: &'a mut Repository<B>,
    validator: RecordValidator,
}

impl<'a, B: StorageBackend> RentalService<'a, B> {
    /// Create a service over `repository`
    pub fn new(repository: &'a mut Repository<B>, validator: RecordValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Add a new car; its id must not exist yet
    pub fn add_car(&mut self, record: Record) -> EngineResult<()> {
        self.validator.check(&record)?;
        if self.repository.find(&record.id).is_some() {
            return Err(EngineError::DuplicateId(record.id));
        }
        let id = record.id.clone();
        self.repository.commit_record(record)?;
        info!("Added car {}", id);
        Ok(())
    }

    /// Up to `limit` available cars, ordered by id
    pub fn list_available(&self, limit: usize) -> Vec<Record> {
        let mut cars = self.repository.available();
        cars.truncate(limit);
        cars
    }

    /// Rent an available car to `user_id`
    ///
    /// Returns the amount due today, one day at the car's daily price.
    pub fn rent_car(&mut self, car_id: &str, user_id: &str) -> EngineResult<f64> {
        let car = self
            .repository
            .find(car_id)
            .ok_or_else(|| EngineError::NotFound(car_id.to_string()))?;
        if !car.is_available() {
            return Err(EngineError::NotAvailable {
                id: car_id.to_string(),
                status: car.status.clone(),
            });
        }
        let amount_due = car.price_per_day;

        let rented = car.clone().with_status(rented_status(user_id));
        self.repository.commit_record(rented)?;
        info!("Car {} rented by {}", car_id, user_id);
        Ok(amount_due)
    }

    /// Mark a car available again
    pub fn return_car(&mut self, car_id: &str) -> EngineResult<()> {
        let returned = self
            .repository
            .find(car_id)
            .ok_or_else(|| EngineError::NotFound(car_id.to_string()))?
            .clone()
            .with_status(AVAILABLE);
        self.repository.commit_record(returned)?;
        info!("Car {} returned", car_id);
        Ok(())
    }

    /// Validate and merge `records`, then flush
    ///
    /// Nothing is merged if any record is invalid. Returns the number of
    /// records merged.
    pub fn ingest_records(&mut self, records: Vec<Record>) -> EngineResult<usize> {
        for record in &records {
            self.validator.check(record)?;
        }
        let count = records.len();
        self.repository.bulk_upsert(records);
        self.repository.flush()?;
        Ok(count)
    }

    /// Flush pending changes
    pub fn save(&mut self) -> EngineResult<bool> {
        self.repository.flush()
    }

    /// Number of cars tracked
    pub fn total_records(&self) -> usize {
        self.repository.total_records()
    }
}
