use crate::artifacts::diff::Hunk;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::digest::Digest;

/// How one file of a commit compares to the parent commit
///
/// Only the parent's own entries are consulted. A file staged in an older
/// ancestor but not in the parent shows up as `Introduced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// Part of the root commit; there is nothing to compare against
    Initial { content: String },
    /// Not staged in the parent commit
    Introduced { content: String },
    /// Staged in the parent commit too
    Modified { hunks: Vec<Hunk> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInspection {
    pub path: String,
    pub digest: Digest,
    pub change: FileChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInspection {
    pub commit: CommitRecord,
    pub files: Vec<FileInspection>,
}

impl CommitInspection {
    pub fn file(&self, path: &str) -> Option<&FileInspection> {
        self.files.iter().find(|file| file.path == path)
    }
}
