//! Commit object
//!
//! A commit records the entries staged since the previous commit (a delta,
//! not a snapshot of every tracked file), a message, a timestamp and the
//! digest of its parent.
//!
//! ## Format
//!
//! ```text
//! {"timestamp":"2024-01-01T12:00:00.000Z","message":"first",
//!  "entries":[{"path":"a.txt","digest":"<40 hex>"}],"parent":null}
//! ```
//!
//! The commit's own digest is computed over these bytes and is not part of them.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Commit body as written to the object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// ISO-8601 UTC timestamp with millisecond precision
    timestamp: String,
    message: String,
    entries: Vec<IndexEntry>,
    /// `None` marks the root commit
    parent: Option<Digest>,
}

impl Commit {
    pub fn new(
        message: String,
        entries: Vec<IndexEntry>,
        parent: Option<Digest>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Commit {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            message,
            entries,
            parent,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn parent(&self) -> Option<&Digest> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Packable for Commit {
    fn pack(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }
}

impl Unpackable for Commit {
    fn unpack(digest: &Digest, content: Bytes) -> Result<Self> {
        serde_json::from_slice(&content).map_err(|e| RepositoryError::corrupt(digest, e))
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        String::from_utf8_lossy(&serde_json::to_vec_pretty(self).unwrap_or_default()).into_owned()
    }
}

/// A stored commit together with the digest it is stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    digest: Digest,
    commit: Commit,
}

impl CommitRecord {
    pub fn new(digest: Digest, commit: Commit) -> Self {
        CommitRecord { digest, commit }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn into_commit(self) -> Commit {
        self.commit
    }
}

impl Deref for CommitRecord {
    type Target = Commit;

    fn deref(&self) -> &Self::Target {
        &self.commit
    }
}
