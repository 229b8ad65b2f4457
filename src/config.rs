//! Repository location settings
//!
//! A repository is always addressed through an explicit [`RepositoryConfig`];
//! every area derives its paths from it at construction.

use std::path::{Path, PathBuf};

/// Name of the store directory created under the repository root
pub const DEFAULT_STORE_DIR: &str = ".groot";

/// Environment variable naming the repository root
pub const REPOSITORY_DIR_ENV: &str = "GROOT_DIR";

/// Environment variable pinning commit timestamps (RFC 3339)
pub const COMMIT_DATE_ENV: &str = "GROOT_COMMIT_DATE";

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV: &str = "GROOT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    root: PathBuf,
    store_dir: String,
}

impl RepositoryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RepositoryConfig {
            root: root.into(),
            store_dir: DEFAULT_STORE_DIR.to_string(),
        }
    }

    pub fn with_store_dir(mut self, store_dir: impl Into<String>) -> Self {
        self.store_dir = store_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_dir(&self) -> &str {
        &self.store_dir
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.store_dir)
    }

    pub fn objects_path(&self) -> PathBuf {
        self.store_path().join("objects")
    }

    pub fn index_path(&self) -> PathBuf {
        self.store_path().join("index")
    }
}
