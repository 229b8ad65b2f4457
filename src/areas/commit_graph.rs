//! Commit history anchored at HEAD
//!
//! The graph is a single chain: every commit has at most one parent and
//! HEAD names the newest. Creating a commit is the only transition, and it
//! moves HEAD and clears the index together (see [`CommitGraph::commit_at`]).

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::{Commit, CommitRecord};
use crate::artifacts::objects::digest::Digest;
use crate::errors::{RepositoryError, Result};
use chrono::{DateTime, Utc};
use derive_new::new;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, new)]
pub struct CommitGraph<'r> {
    database: &'r Database,
    refs: &'r Refs,
}

impl<'r> CommitGraph<'r> {
    /// Digest of the newest commit, `None` before the first commit
    pub fn head(&self) -> Result<Option<Digest>> {
        self.refs.read_head()
    }

    pub fn load(&self, digest: &Digest) -> Result<CommitRecord> {
        self.database.parse_commit(digest)
    }

    /// Walk from `start` to the root, newest first
    pub fn walk(&self, start: Option<Digest>) -> RevList<'r> {
        RevList::new(self.database, start)
    }

    /// Record `staged` as a new commit on top of `parent`, stamped now
    pub fn commit(
        &self,
        message: &str,
        staged: Vec<IndexEntry>,
        parent: Option<Digest>,
        index: &mut Index,
    ) -> Result<CommitRecord> {
        self.commit_at(message, staged, parent, Utc::now(), index)
    }

    /// Record `staged` as a new commit on top of `parent`
    ///
    /// Fails with `EmptyCommit` when nothing is staged, before anything is
    /// written. Every staged digest and the parent must already be stored.
    ///
    /// The caller must hold the index lock. HEAD moves and the index is
    /// cleared under the commit journal; if HEAD cannot be moved the journal
    /// is dropped and the index is left as it was.
    pub fn commit_at(
        &self,
        message: &str,
        staged: Vec<IndexEntry>,
        parent: Option<Digest>,
        timestamp: DateTime<Utc>,
        index: &mut Index,
    ) -> Result<CommitRecord> {
        if staged.is_empty() {
            return Err(RepositoryError::EmptyCommit);
        }

        if let Some(missing) = staged
            .iter()
            .find(|entry| !self.database.contains(&entry.digest))
        {
            return Err(RepositoryError::ObjectNotFound(missing.digest.clone()));
        }

        if let Some(parent) = &parent {
            self.load(parent)?;
        }

        let commit = Commit::new(message.to_string(), staged, parent, timestamp);
        let digest = self.database.store(&commit)?;

        self.refs.write_pending(&digest)?;
        if let Err(e) = self.refs.update_head(&digest) {
            self.refs.clear_pending()?;
            return Err(e);
        }
        index.clear()?;
        self.refs.clear_pending()?;

        info!(%digest, entries = commit.entries().len(), "created commit");

        Ok(CommitRecord::new(digest, commit))
    }

    /// Finish or drop a commit interrupted between HEAD and index updates
    ///
    /// The caller must hold the index lock. Running it twice is harmless.
    pub fn recover(&self, index: &mut Index) -> Result<()> {
        let Some(pending) = self.refs.read_pending()? else {
            return Ok(());
        };

        if self.head()?.as_ref() == Some(&pending) {
            warn!(digest = %pending, "completing interrupted commit: clearing index");
            index.clear()?;
        } else {
            warn!(digest = %pending, "dropping interrupted commit: HEAD never moved");
        }

        self.refs.clear_pending()
    }
}
