//! On-disk line format for inventory files.
//!
//! Keeping serialization separate from how files are read and replaced
//! makes format evolution easier to manage.
//!
//! # Line Format
//!
//! ```text
//! id,model,condition,pricePerDay,status[,dueDate]
//! ```
//!
//! The legacy four-field form `id,condition,pricePerDay,status` is still
//! accepted; the id doubles as the model. Tokens past the status are
//! ignored.

pub mod line;

pub use line::{LineCodec, ParseError, DELIMITER, MIN_FIELDS};
