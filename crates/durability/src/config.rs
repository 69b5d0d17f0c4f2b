//! Backend selection
//!
//! The process resolves a [`BackendConfig`] once at start-up and hands it to
//! [`open_backend`]. This is the only seam through which durability
//! semantics change.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fleet_core::RecordValidator;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::backend::StorageBackend;
use crate::file::FileBackend;
use crate::memory::MemoryBackend;

/// Dataset file used when a file backend is selected without a path
pub const DEFAULT_DATA_FILE: &str = "cars.txt";

/// Invalid backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The selector is neither `file` nor `memory`
    #[error("unknown backend '{0}', expected 'file' or 'memory'")]
    UnknownBackend(String),

    /// A file backend was configured with an empty path
    #[error("file backend requires a non-empty path")]
    MissingPath,
}

/// Which backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Dataset file, durable across restarts
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

impl BackendKind {
    /// Selector string as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::File => "file",
            BackendKind::Memory => "memory",
        }
    }

    /// Whether records outlive the process
    pub fn is_durable(&self) -> bool {
        matches!(self, BackendKind::File)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(BackendKind::File),
            "memory" => Ok(BackendKind::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

/// Backend selector plus the dataset path for file backends
///
/// ```ignore
/// let config: BackendConfig = serde_json::from_str(r#"{"kind":"memory"}"#)?;
/// let backend = open_backend(&config, RecordValidator::new())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Which backend to open
    pub kind: BackendKind,
    /// Dataset file; ignored by the memory backend
    pub path: PathBuf,
}

impl BackendConfig {
    /// File backend over `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: BackendKind::File,
            path: path.into(),
        }
    }

    /// Memory backend
    pub fn memory() -> Self {
        Self {
            kind: BackendKind::Memory,
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }

    /// The dataset path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the configuration without opening anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kind == BackendKind::File && self.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingPath);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DATA_FILE)
    }
}

/// Open the backend described by `config`
pub fn open_backend(
    config: &BackendConfig,
    validator: RecordValidator,
) -> Result<Box<dyn StorageBackend>, ConfigError> {
    config.validate()?;

    let backend: Box<dyn StorageBackend> = match config.kind {
        BackendKind::File => Box::new(FileBackend::new(config.path.clone(), validator)),
        BackendKind::Memory => Box::new(MemoryBackend::new()),
    };
    info!("Opened storage backend {}", backend.name());
    Ok(backend)
}
