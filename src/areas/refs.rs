//! HEAD and the commit journal
//!
//! HEAD holds either nothing (no commits yet) or the digest of the latest
//! commit. It only ever moves forward, one commit at a time.
//!
//! ## Commit journal
//!
//! Moving HEAD and clearing the index are two file replacements. While a
//! commit is between them, `COMMIT_PENDING` names the commit being applied;
//! [`Refs::read_pending`] lets the next index holder finish or drop it.

use crate::artifacts::core::fs::{remove_if_exists, write_atomically};
use crate::artifacts::objects::digest::Digest;
use crate::errors::{RepositoryError, Result};
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the HEAD file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the commit journal file
pub const COMMIT_PENDING_NAME: &str = "COMMIT_PENDING";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the store directory (typically `.groot`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn pending_path(&self) -> PathBuf {
        self.path.join(COMMIT_PENDING_NAME)
    }

    /// Create an empty HEAD unless one exists
    ///
    /// Returns whether a file was created.
    pub fn init_head(&self) -> Result<bool> {
        let head_path = self.head_path();
        if head_path.exists() {
            return Ok(false);
        }

        write_atomically(&head_path, b"")?;
        Ok(true)
    }

    /// Current HEAD, `None` before the first commit
    pub fn read_head(&self) -> Result<Option<Digest>> {
        Self::read_digest_file(&self.head_path())
    }

    pub fn update_head(&self, digest: &Digest) -> Result<()> {
        write_atomically(&self.head_path(), digest.as_ref().as_bytes())?;
        debug!(%digest, "moved HEAD");

        Ok(())
    }

    pub fn read_pending(&self) -> Result<Option<Digest>> {
        Self::read_digest_file(&self.pending_path())
    }

    pub fn write_pending(&self, digest: &Digest) -> Result<()> {
        write_atomically(&self.pending_path(), digest.as_ref().as_bytes())
    }

    pub fn clear_pending(&self) -> Result<()> {
        remove_if_exists(&self.pending_path())
    }

    fn read_digest_file(path: &Path) -> Result<Option<Digest>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::io(path)(e)),
        };

        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        Digest::try_parse(content).map(Some)
    }
}
