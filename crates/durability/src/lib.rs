//! Durability layer for fleetdb
//!
//! This crate defines where the repository's records live between process
//! runs:
//! - [`StorageBackend`]: load everything, persist everything, report identity
//! - [`FileBackend`]: a dataset file replaced atomically on every persist
//! - [`MemoryBackend`]: process memory only, for tests and ephemeral work
//! - [`BackendConfig`] and [`open_backend`]: the one place where the choice
//!   between the two is made
//!
//! | Backend | Survives restart | Persist cost |
//! |---------|------------------|--------------|
//! | File | Yes | Full-file rewrite + rename |
//! | Memory | No | Clone of the record set |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod file;
pub mod memory;

pub use backend::StorageBackend;
pub use config::{open_backend, BackendConfig, BackendKind, ConfigError, DEFAULT_DATA_FILE};
pub use file::FileBackend;
pub use memory::MemoryBackend;
