//! Index entry representation
//!
//! Each entry records that `path` was staged with the content named by
//! `digest`. Entries are also the payload of commit records.

use crate::artifacts::objects::digest::Digest;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A path staged with a given content digest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct IndexEntry {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Digest of the staged blob
    pub digest: Digest,
}

/// Last-match-wins reads over an ordered entry list
pub trait EntryLookup {
    /// The most recently staged entry for `path`
    fn find_last(&self, path: &str) -> Option<&IndexEntry>;

    /// One entry per path, each the last staged for that path
    ///
    /// Paths are ordered by the position of their last staging.
    fn effective(&self) -> Vec<&IndexEntry>;
}

impl EntryLookup for [IndexEntry] {
    fn find_last(&self, path: &str) -> Option<&IndexEntry> {
        self.iter().rev().find(|entry| entry.path == path)
    }

    fn effective(&self) -> Vec<&IndexEntry> {
        let last_positions = self
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.path.as_str(), position))
            .collect::<HashMap<_, _>>();

        self.iter()
            .enumerate()
            .filter(|(position, entry)| last_positions.get(entry.path.as_str()) == Some(position))
            .map(|(_, entry)| entry)
            .collect()
    }
}
