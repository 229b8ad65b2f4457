//! Repository error taxonomy
//!
//! Every area returns [`RepositoryError`]. Errors travel unchanged up to the
//! command boundary, where `main` turns them into messages and exit codes.

use crate::artifacts::objects::digest::Digest;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit code for success
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for storage and generic failures
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a referenced object or commit that does not exist
pub const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage I/O error at {}: {source}", .path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object not found: {0}")]
    ObjectNotFound(Digest),

    #[error("commit not found: {0}")]
    CommitNotFound(Digest),

    #[error("corrupt commit {digest}: {reason}")]
    CorruptCommit { digest: Digest, reason: String },

    #[error("nothing staged to commit")]
    EmptyCommit,

    #[error("repository already initialized in {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("not a groot repository: {}", .0.display())]
    NotInitialized(PathBuf),

    #[error("invalid digest: {0:?}")]
    InvalidDigest(String),

    #[error("path is outside the repository: {}", .0.display())]
    PathOutsideRepository(PathBuf),

    #[error("path is inside the repository store: {}", .0.display())]
    PathInsideStore(PathBuf),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    /// Build a `map_err` adapter that attaches `path` to an I/O error
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| RepositoryError::StorageIo {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn corrupt(digest: &Digest, reason: impl ToString) -> Self {
        RepositoryError::CorruptCommit {
            digest: digest.clone(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::ObjectNotFound(_)
                | RepositoryError::CommitNotFound(_)
                | RepositoryError::InvalidDigest(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_not_found() {
            EXIT_NOT_FOUND
        } else {
            EXIT_FAILURE
        }
    }
}
