use crate::areas::database::Database;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{RepositoryError, Result};
use std::collections::HashSet;

/// Lazy walk from a start commit back to the root
///
/// Yields each commit, then its parent, until a commit without a parent.
/// A load failure is yielded once and ends the walk; so does a digest seen
/// twice, reported as `CorruptCommit`.
#[derive(Debug, Clone)]
pub struct RevList<'r> {
    database: &'r Database,
    next: Option<Digest>,
    visited: HashSet<Digest>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<Digest>) -> Self {
        RevList {
            database,
            next: start,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let digest = self.next.take()?;

        if !self.visited.insert(digest.clone()) {
            return Some(Err(RepositoryError::corrupt(
                &digest,
                "parent chain loops back to an earlier commit",
            )));
        }

        match self.database.parse_commit(&digest) {
            Ok(record) => {
                // Move to the parent commit for the next iteration
                self.next = record.parent().cloned();
                Some(Ok(record))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::index::index_entry::IndexEntry;
    use crate::artifacts::objects::commit::Commit;
    use crate::artifacts::objects::object::Packable;
    use assert_fs::TempDir;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn database(dir: &TempDir) -> Database {
        let objects = dir.path().join("objects");
        std::fs::create_dir_all(&objects).unwrap();
        Database::new(objects)
    }

    fn commit_on(database: &Database, parent: Option<Digest>, message: &str) -> Digest {
        let blob = database.put(message.as_bytes()).unwrap();
        let commit = Commit::new(
            message.to_string(),
            vec![IndexEntry::new(format!("{message}.txt"), blob)],
            parent,
            Utc::now(),
        );

        database.store(&commit).unwrap()
    }

    #[test]
    fn walk_from_nothing_is_empty() {
        let dir = TempDir::new().unwrap();
        let database = database(&dir);

        assert_eq!(RevList::new(&database, None).count(), 0);
    }

    #[test]
    fn walk_is_newest_first_and_ends_at_root() {
        let dir = TempDir::new().unwrap();
        let database = database(&dir);
        let first = commit_on(&database, None, "first");
        let second = commit_on(&database, Some(first.clone()), "second");
        let third = commit_on(&database, Some(second.clone()), "third");

        let walked = RevList::new(&database, Some(third.clone()))
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(
            walked.iter().map(|c| c.digest().clone()).collect::<Vec<_>>(),
            vec![third.clone(), second, first]
        );
        assert!(walked.last().unwrap().is_root());

        // walking again from the same digest starts over
        assert_eq!(RevList::new(&database, Some(third)).count(), 3);
    }

    #[test]
    fn missing_parent_ends_the_walk_with_an_error() {
        let dir = TempDir::new().unwrap();
        let database = database(&dir);
        let orphan = commit_on(&database, Some(Digest::of(b"gone")), "orphan");

        let walked = RevList::new(&database, Some(orphan)).collect::<Vec<_>>();

        assert_eq!(walked.len(), 2);
        assert!(walked[0].is_ok());
        assert!(matches!(walked[1], Err(RepositoryError::CommitNotFound(_))));
    }

    #[test]
    fn cyclic_history_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let database = database(&dir);

        // hand-write an object whose parent is its own file name
        let looping = Digest::of(b"looping");
        let commit = Commit::new("loop".to_string(), vec![], Some(looping.clone()), Utc::now());
        std::fs::write(
            database.objects_path().join(looping.as_ref()),
            commit.pack().unwrap(),
        )
        .unwrap();

        let walked = RevList::new(&database, Some(looping)).collect::<Vec<_>>();

        assert_eq!(walked.len(), 2);
        assert!(matches!(walked[1], Err(RepositoryError::CorruptCommit { .. })));
    }
}
