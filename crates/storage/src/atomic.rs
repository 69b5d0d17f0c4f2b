//! Atomic whole-file replacement
//!
//! Lines are written to a sibling temporary file, flushed and fsynced, and
//! only then renamed over the target. The rename is the single moment the
//! target changes, so a reader of the target sees either the old contents
//! or the new ones, never a prefix.
//!
//! ```text
//! write(lines):
//!   create_dir_all(parent)
//!   <name>.<uuid>.tmp  <- lines (64 KiB buffer), flush, fsync
//!   rename(tmp, target)
//! ```
//!
//! A [`StagedFile`] that is dropped without [`StagedFile::commit`] removes
//! its temporary file and leaves the target untouched.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};

/// Output buffer capacity for staged writes
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Writes a full set of lines to a target path via write-temp-then-rename
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    /// Create a writer for `target`
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The file this writer replaces
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Replace the target with `lines`, each newline-terminated, in order
    ///
    /// On error the previous contents of the target are left untouched.
    pub fn write<I, S>(&self, lines: I) -> StorageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(lines)?.commit()
    }

    /// Write `lines` to a temporary file next to the target without
    /// replacing anything yet
    pub fn stage<I, S>(&self, lines: I) -> StorageResult<StagedFile>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let file_name = self
            .target
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StorageError::io(
                    &self.target,
                    io::Error::new(io::ErrorKind::InvalidInput, "target has no file name"),
                )
            })?;

        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        let temp = dir.join(format!("{}.{}.tmp", file_name, Uuid::new_v4().simple()));
        let file = File::create(&temp).map_err(|e| StorageError::io(&temp, e))?;

        // From here on the staged file owns the temp path and removes it if
        // anything below fails.
        let staged = StagedFile {
            temp,
            target: self.target.clone(),
            committed: false,
        };

        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
        let mut count = 0usize;
        for line in lines {
            writer
                .write_all(line.as_ref().as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| StorageError::io(&staged.temp, e))?;
            count += 1;
        }
        let file = writer
            .into_inner()
            .map_err(|e| StorageError::io(&staged.temp, e.into_error()))?;
        file.sync_all()
            .map_err(|e| StorageError::io(&staged.temp, e))?;
        drop(file);

        debug!(
            "Staged {} lines for {} in {}",
            count,
            self.target.display(),
            staged.temp.display()
        );
        Ok(staged)
    }
}

/// A fully written, synced temporary file waiting to replace its target
#[derive(Debug)]
pub struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Path of the temporary file
    pub fn temp_path(&self) -> &Path {
        &self.temp
    }

    /// Path that [`commit`](Self::commit) replaces
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Atomically rename the temporary file over the target
    pub fn commit(mut self) -> StorageResult<()> {
        fs::rename(&self.temp, &self.target).map_err(|e| StorageError::io(&self.target, e))?;
        self.committed = true;
        debug!("Replaced {}", self.target.display());
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            // Best effort: the temp file may already be gone
            let _ = fs::remove_file(&self.temp);
        }
    }
}
