use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Working directory holding the files that get staged
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Arc<Path>,
    /// Store directory name, never listed
    ignored: Arc<str>,
}

impl Workspace {
    pub fn new(path: PathBuf, store_dir: &str) -> Self {
        Workspace {
            path: Arc::from(path),
            ignored: Arc::from(store_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expand `target` into the files it names
    ///
    /// A file yields itself, a directory yields every file beneath it (sorted).
    /// Paths come back relative to the workspace root. Targets inside the
    /// store directory are refused.
    pub fn list_files(&self, target: &Path) -> Result<Vec<PathBuf>> {
        let absolute = self.absolute(target);
        let absolute = absolute
            .canonicalize()
            .map_err(RepositoryError::io(&absolute))?;

        let relative = self.relative(&absolute)?;
        if self.is_ignored(&relative) {
            return Err(RepositoryError::PathInsideStore(absolute));
        }
        if !absolute.is_dir() {
            return Ok(vec![relative]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&absolute)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != &*self.ignored);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&absolute).to_path_buf();
                RepositoryError::StorageIo {
                    path,
                    source: e.into(),
                }
            })?;

            if entry.file_type().is_file() {
                let relative = self.relative(entry.path())?;
                if !self.is_ignored(&relative) {
                    files.push(relative);
                }
            }
        }

        Ok(files)
    }

    /// Read a file given relative to the workspace root
    pub fn read_file(&self, path: &Path) -> Result<Bytes> {
        let absolute = self.path.join(path);

        std::fs::read(&absolute)
            .map(Bytes::from)
            .map_err(RepositoryError::io(&absolute))
    }

    /// Key under which a relative path is staged: `/`-separated
    pub fn entry_name(path: &Path) -> String {
        path.components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn absolute(&self, target: &Path) -> PathBuf {
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.path.join(target)
        }
    }

    fn relative(&self, absolute: &Path) -> Result<PathBuf> {
        absolute
            .strip_prefix(&self.path)
            .map(Path::to_path_buf)
            .map_err(|_| RepositoryError::PathOutsideRepository(absolute.to_path_buf()))
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        relative.components().any(|component| match component {
            Component::Normal(name) => name.to_string_lossy() == *self.ignored,
            _ => false,
        })
    }
}
