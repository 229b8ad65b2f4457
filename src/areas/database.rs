//! Content-addressed object store
//!
//! Objects are immutable files named by their digest under `objects/`.
//! Writing the same bytes twice stores them once; nothing is ever deleted.

use crate::artifacts::core::fs::write_atomically;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, CommitRecord};
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<Path>,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();

        Database {
            path: Arc::from(path),
        }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Digest `content` would be stored under; touches nothing
    pub fn digest_of(content: &[u8]) -> Digest {
        Digest::of(content)
    }

    /// Store `content` unless an object with the same digest already exists
    pub fn put(&self, content: &[u8]) -> Result<Digest> {
        let digest = Self::digest_of(content);
        let object_path = self.object_path(&digest);

        if object_path.exists() {
            debug!(%digest, "object already stored");
            return Ok(digest);
        }

        write_atomically(&object_path, content)?;
        debug!(%digest, size = content.len(), "stored object");

        Ok(digest)
    }

    /// Raw bytes of the object stored under `digest`
    pub fn get(&self, digest: &Digest) -> Result<Bytes> {
        let object_path = self.object_path(digest);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::ObjectNotFound(digest.clone()))
            }
            Err(e) => Err(RepositoryError::io(&object_path)(e)),
        }
    }

    pub fn contains(&self, digest: &Digest) -> bool {
        self.object_path(digest).is_file()
    }

    pub fn store(&self, object: &impl Object) -> Result<Digest> {
        self.put(&object.pack()?)
    }

    pub fn parse_blob(&self, digest: &Digest) -> Result<Blob> {
        Blob::unpack(digest, self.get(digest)?)
    }

    /// Load the commit stored under `digest`
    ///
    /// A missing object is `CommitNotFound`; bytes that are not a commit
    /// record are `CorruptCommit`.
    pub fn parse_commit(&self, digest: &Digest) -> Result<CommitRecord> {
        let content = self.get(digest).map_err(|e| match e {
            RepositoryError::ObjectNotFound(digest) => RepositoryError::CommitNotFound(digest),
            other => other,
        })?;
        let commit = Commit::unpack(digest, content)?;

        Ok(CommitRecord::new(digest.clone(), commit))
    }

    fn object_path(&self, digest: &Digest) -> PathBuf {
        self.path.join(digest.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::index::index_entry::IndexEntry;
    use assert_fs::TempDir;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn objects_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("objects")).unwrap();
        dir
    }

    fn database(dir: &TempDir) -> Database {
        Database::new(dir.path().join("objects"))
    }

    #[rstest]
    fn put_then_get_returns_the_same_bytes(objects_dir: TempDir) {
        let database = database(&objects_dir);

        let digest = database.put(b"line1\nline2\n").unwrap();

        assert_eq!(digest, Database::digest_of(b"line1\nline2\n"));
        assert_eq!(database.get(&digest).unwrap(), Bytes::from_static(b"line1\nline2\n"));
        assert!(database.objects_path().join(digest.as_ref()).is_file());
    }

    #[rstest]
    fn put_is_idempotent(objects_dir: TempDir) {
        let database = database(&objects_dir);

        let first = database.put(b"same").unwrap();
        let second = database.put(b"same").unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(database.objects_path()).unwrap().count(), 1);
    }

    #[rstest]
    fn get_of_absent_digest_is_object_not_found(objects_dir: TempDir) {
        let database = database(&objects_dir);
        let digest = Digest::of(b"never stored");

        assert!(matches!(
            database.get(&digest),
            Err(RepositoryError::ObjectNotFound(d)) if d == digest
        ));
        assert!(!database.contains(&digest));
    }

    #[test]
    fn unwritable_store_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let database = Database::new(dir.path().join("missing-objects"));

        assert!(matches!(
            database.put(b"data"),
            Err(RepositoryError::StorageIo { .. })
        ));
    }

    #[rstest]
    fn commits_load_back_with_their_digest(objects_dir: TempDir) {
        let database = database(&objects_dir);
        let blob = database.put(b"one").unwrap();
        let commit = Commit::new(
            "first".to_string(),
            vec![IndexEntry::new("a.txt".to_string(), blob)],
            None,
            Utc::now(),
        );

        let digest = database.store(&commit).unwrap();
        let record = database.parse_commit(&digest).unwrap();

        assert_eq!(record.digest(), &digest);
        assert_eq!(record.into_commit(), commit);
    }

    #[rstest]
    fn parse_commit_distinguishes_missing_from_corrupt(objects_dir: TempDir) {
        let database = database(&objects_dir);
        let blob = database.put(b"not a commit").unwrap();

        assert!(matches!(
            database.parse_commit(&Digest::of(b"absent")),
            Err(RepositoryError::CommitNotFound(_))
        ));
        assert!(matches!(
            database.parse_commit(&blob),
            Err(RepositoryError::CorruptCommit { .. })
        ));
    }

    proptest! {
        #[test]
        fn stored_content_round_trips(content in proptest::collection::vec(any::<u8>(), 0..256)) {
            let dir = TempDir::new().unwrap();
            std::fs::create_dir_all(dir.path().join("objects")).unwrap();
            let database = database(&dir);

            let digest = database.put(&content).unwrap();

            prop_assert_eq!(database.get(&digest).unwrap().to_vec(), content);
        }
    }
}
