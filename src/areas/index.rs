//! Staging index
//!
//! The index is the ordered list of entries waiting for the next commit.
//! Staging appends; nothing is deduplicated, readers resolve repeated paths
//! with the last match.
//!
//! ## Locking
//!
//! Read-modify-write cycles run under an exclusive lock on `index.lock`
//! (see [`Index::lock`]). The index file itself is always replaced
//! atomically, so an unlocked reader never sees a torn write.

use crate::artifacts::core::fs::write_atomically;
use crate::artifacts::index::EMPTY_INDEX;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{RepositoryError, Result};
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Staging area persisted as a JSON list
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.groot/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<IndexEntry>,
}

/// Exclusive hold on the index across processes
///
/// Released on drop.
pub struct IndexLock {
    _guard: FileGuard<Box<File>>,
}

impl Index {
    /// Create an empty, not yet loaded index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (typically `.groot/index`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Index {
            path: path.into().into_boxed_path(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Block until this process holds the index lock
    pub fn lock(&self) -> Result<IndexLock> {
        let lock_path = self.lock_path();
        let lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(RepositoryError::io(&lock_path))?;

        let guard = file_guard::lock(Box::new(lock_file), Lock::Exclusive, 0, 1)
            .map_err(RepositoryError::io(&lock_path))?;

        Ok(IndexLock { _guard: guard })
    }

    /// Load the staged entries from disk
    ///
    /// A missing or blank index file reads as empty.
    pub fn rehydrate(&mut self) -> Result<()> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(RepositoryError::io(&self.path)(e)),
        };

        self.entries = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)?
        };

        Ok(())
    }

    /// Current entries, reloaded from disk
    pub fn load(&mut self) -> Result<&[IndexEntry]> {
        self.rehydrate()?;

        Ok(&self.entries)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and persist the list
    pub fn stage(&mut self, entry: IndexEntry) -> Result<()> {
        self.stage_all(std::iter::once(entry))
    }

    /// Append entries in order and persist the list once
    pub fn stage_all(&mut self, entries: impl IntoIterator<Item = IndexEntry>) -> Result<()> {
        self.entries.extend(entries);
        self.write_updates()
    }

    /// Replace the persisted list with an empty one
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.write_updates()
    }

    pub fn write_updates(&self) -> Result<()> {
        let content = if self.entries.is_empty() {
            EMPTY_INDEX.to_string()
        } else {
            serde_json::to_string(&self.entries)?
        };

        write_atomically(&self.path, content.as_bytes())?;
        debug!(entries = self.entries.len(), "wrote index");

        Ok(())
    }
}
