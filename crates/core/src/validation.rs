//! Record validation
//!
//! [`RecordValidator`] is a pure predicate over a record's fields. It is
//! consulted by the codec (reject malformed input, refuse to serialize
//! invalid records) and by every direct insertion path.

use crate::error::{ValidationError, ValidationResult};
use crate::record::{Condition, Record};

/// Characters no text field may contain: the field delimiter and line breaks
///
/// A record is stored as one delimited line, so a field holding any of these
/// would not read back as the same record.
pub const RESERVED_CHARS: [char; 3] = [',', '\n', '\r'];

/// Checks the data-model invariants of a [`Record`]
///
/// The validator holds no state; it is `Copy` so every component that needs
/// one can keep its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Create a validator
    pub fn new() -> Self {
        RecordValidator
    }

    /// Returns true when `record` satisfies every invariant
    pub fn validate(&self, record: &Record) -> bool {
        self.check(record).is_ok()
    }

    /// Like [`validate`](Self::validate), but reports the first violation
    pub fn check(&self, record: &Record) -> ValidationResult<()> {
        if record.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if record.model.is_empty() {
            return Err(ValidationError::EmptyModel {
                id: record.id.clone(),
            });
        }
        for (field, value) in [
            ("id", &record.id),
            ("model", &record.model),
            ("status", &record.status),
        ] {
            if value.contains(&RESERVED_CHARS[..]) {
                return Err(ValidationError::Unrepresentable {
                    id: record.id.clone(),
                    field,
                });
            }
        }
        if Condition::from_token(&record.condition).is_none() {
            return Err(ValidationError::UnknownCondition {
                id: record.id.clone(),
                condition: record.condition.clone(),
            });
        }
        if !record.price_per_day.is_finite() || record.price_per_day <= 0.0 {
            return Err(ValidationError::InvalidPrice {
                id: record.id.clone(),
                price: record.price_per_day,
            });
        }
        Ok(())
    }
}
