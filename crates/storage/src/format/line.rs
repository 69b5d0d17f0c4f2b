//! Line codec: one record per comma-delimited line

use fleet_core::{Record, RecordValidator, ValidationError};
use thiserror::Error;

/// Field delimiter
pub const DELIMITER: char = ',';

/// Fewest fields a line may have (legacy form without a model column)
pub const MIN_FIELDS: usize = 4;

/// Fields in the current form: id, model, condition, price, status
const FULL_FIELDS: usize = 5;

/// A line could not be turned into a valid record
///
/// Every variant carries the raw line for diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Fewer than [`MIN_FIELDS`] delimited fields
    #[error("malformed record, expected at least {} fields but found {found}: {line}", MIN_FIELDS)]
    TooFewFields {
        /// Number of fields present
        found: usize,
        /// Raw line
        line: String,
    },

    /// The price token is not a number
    #[error("malformed price '{token}': {line}")]
    InvalidPrice {
        /// Offending token
        token: String,
        /// Raw line
        line: String,
    },

    /// The line tokenized but the record fails validation
    #[error("validation failed ({source}) for line: {line}")]
    Invalid {
        /// Raw line
        line: String,
        /// Violated invariant
        #[source]
        source: ValidationError,
    },
}

/// Parses lines into records and serializes records into lines
///
/// Both directions run the validator, so an invalid record can neither be
/// read in nor written out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec {
    validator: RecordValidator,
}

impl LineCodec {
    /// Create a codec that validates with `validator`
    pub fn new(validator: RecordValidator) -> Self {
        Self { validator }
    }

    /// Parse one line
    ///
    /// Returns `Ok(None)` for an empty line: no record, not an error.
    pub fn parse(&self, line: &str) -> Result<Option<Record>, ParseError> {
        if line.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split(DELIMITER).collect();
        if tokens.len() < MIN_FIELDS {
            return Err(ParseError::TooFewFields {
                found: tokens.len(),
                line: line.to_string(),
            });
        }

        // Positions shift by one when the model column is absent
        let (model, rest) = if tokens.len() >= FULL_FIELDS {
            (tokens[1], &tokens[2..])
        } else {
            (tokens[0], &tokens[1..])
        };

        let price_token = rest[1];
        let price_per_day =
            price_token
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidPrice {
                    token: price_token.to_string(),
                    line: line.to_string(),
                })?;

        let record = Record {
            id: tokens[0].to_string(),
            model: model.to_string(),
            condition: rest[0].to_string(),
            price_per_day,
            status: rest[2].to_string(),
        };

        self.validator
            .check(&record)
            .map_err(|source| ParseError::Invalid {
                line: line.to_string(),
                source,
            })?;

        Ok(Some(record))
    }

    /// Serialize one record, without the trailing newline
    ///
    /// Re-validates even if the caller already did. A valid record never
    /// holds the delimiter or a line break, so the line always parses back to
    /// the same record.
    pub fn serialize(&self, record: &Record) -> Result<String, ValidationError> {
        self.validator.check(record)?;

        Ok(format!(
            "{id}{d}{model}{d}{condition}{d}{price}{d}{status}",
            id = record.id,
            model = record.model,
            condition = record.condition,
            price = record.price_per_day,
            status = record.status,
            d = DELIMITER,
        ))
    }
}
