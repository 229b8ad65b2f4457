use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::artifacts::diff::diff_lines;
use crate::artifacts::index::index_entry::{EntryLookup, IndexEntry};
use crate::artifacts::inspect::file_change::{CommitInspection, FileChange, FileInspection};
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    database: &'r Database,
    graph: CommitGraph<'r>,
}

impl<'r> Inspector<'r> {
    /// Compare every file of the commit stored under `digest` with its parent
    ///
    /// Repeated paths in the commit are reported once, with the last staged
    /// content.
    pub fn show_commit(&self, digest: &Digest) -> Result<CommitInspection> {
        let commit = self.graph.load(digest)?;
        let parent = commit
            .parent()
            .map(|parent| self.graph.load(parent))
            .transpose()?;

        let files = commit
            .entries()
            .effective()
            .into_iter()
            .map(|entry| self.inspect_file(entry, parent.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(CommitInspection { commit, files })
    }

    fn inspect_file(
        &self,
        entry: &IndexEntry,
        parent: Option<&CommitRecord>,
    ) -> Result<FileInspection> {
        let content = self.text_of(&entry.digest)?;

        let change = match parent {
            None => FileChange::Initial { content },
            Some(parent) => match parent.entries().find_last(&entry.path) {
                Some(previous) => FileChange::Modified {
                    hunks: diff_lines(&self.text_of(&previous.digest)?, &content),
                },
                None => FileChange::Introduced { content },
            },
        };

        Ok(FileInspection {
            path: entry.path.clone(),
            digest: entry.digest.clone(),
            change,
        })
    }

    fn text_of(&self, digest: &Digest) -> Result<String> {
        Ok(self.database.parse_blob(digest)?.text().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::index::Index;
    use crate::areas::refs::Refs;
    use crate::artifacts::diff::{Hunk, HunkKind};
    use crate::errors::RepositoryError;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    struct Store {
        dir: TempDir,
        database: Database,
        refs: Refs,
    }

    impl Store {
        fn graph(&self) -> CommitGraph<'_> {
            CommitGraph::new(&self.database, &self.refs)
        }

        fn inspector(&self) -> Inspector<'_> {
            Inspector::new(&self.database, self.graph())
        }

        /// Stage `files` and commit them on top of HEAD
        fn commit(&self, message: &str, files: &[(&str, &str)]) -> Digest {
            let mut index = Index::new(self.dir.path().join("index"));
            for (path, content) in files {
                let digest = self.database.put(content.as_bytes()).unwrap();
                index
                    .stage(IndexEntry::new(path.to_string(), digest))
                    .unwrap();
            }

            let staged = index.entries().to_vec();
            let head = self.graph().head().unwrap();
            self.graph()
                .commit(message, staged, head, &mut index)
                .unwrap()
                .digest()
                .clone()
        }
    }

    #[fixture]
    fn store() -> Store {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("objects")).unwrap();
        let database = Database::new(dir.path().join("objects"));
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());
        refs.init_head().unwrap();

        Store { dir, database, refs }
    }

    #[rstest]
    fn root_commit_files_are_initial(store: Store) {
        let first = store.commit("first", &[("a.txt", "line1\nline2\n")]);

        let inspection = store.inspector().show_commit(&first).unwrap();

        assert_eq!(inspection.commit.digest(), &first);
        assert_eq!(
            inspection.files,
            vec![FileInspection {
                path: "a.txt".to_string(),
                digest: Digest::of(b"line1\nline2\n"),
                change: FileChange::Initial {
                    content: "line1\nline2\n".to_string()
                },
            }]
        );
    }

    #[rstest]
    fn changed_line_is_diffed_against_the_parent(store: Store) {
        store.commit("first", &[("a.txt", "line1\nline2\n")]);
        let second = store.commit("second", &[("a.txt", "line1\nCHANGED\n")]);

        let inspection = store.inspector().show_commit(&second).unwrap();

        assert_eq!(
            inspection.file("a.txt").unwrap().change,
            FileChange::Modified {
                hunks: vec![
                    Hunk::new(HunkKind::Equal, "line1\n"),
                    Hunk::new(HunkKind::Removed, "line2\n"),
                    Hunk::new(HunkKind::Added, "CHANGED\n"),
                ]
            }
        );
    }

    #[rstest]
    fn untouched_file_is_absent_from_a_later_commit(store: Store) {
        store.commit("first", &[("a.txt", "line1\nline2\n")]);
        store.commit("second", &[("a.txt", "line1\nCHANGED\n")]);
        let third = store.commit("third", &[("b.txt", "bee\n")]);

        let inspection = store.inspector().show_commit(&third).unwrap();

        // commits only carry what was staged since the previous one
        assert!(inspection.file("a.txt").is_none());
        assert_eq!(inspection.files.len(), 1);
        assert_eq!(
            inspection.file("b.txt").unwrap().change,
            FileChange::Introduced {
                content: "bee\n".to_string()
            }
        );
    }

    #[rstest]
    fn only_the_parent_entries_are_searched(store: Store) {
        store.commit("first", &[("a.txt", "one\n")]);
        store.commit("second", &[("b.txt", "two\n")]);
        let third = store.commit("third", &[("a.txt", "three\n")]);

        let inspection = store.inspector().show_commit(&third).unwrap();

        assert_eq!(
            inspection.file("a.txt").unwrap().change,
            FileChange::Introduced {
                content: "three\n".to_string()
            }
        );
    }

    #[rstest]
    fn repeated_path_is_reported_once_with_the_last_content(store: Store) {
        store.commit("first", &[("a.txt", "old\n")]);
        let second = store.commit("second", &[("a.txt", "draft\n"), ("a.txt", "final\n")]);

        let inspection = store.inspector().show_commit(&second).unwrap();

        assert_eq!(inspection.files.len(), 1);
        assert_eq!(inspection.files[0].digest, Digest::of(b"final\n"));
        assert_eq!(
            inspection.files[0].change,
            FileChange::Modified {
                hunks: vec![
                    Hunk::new(HunkKind::Removed, "old\n"),
                    Hunk::new(HunkKind::Added, "final\n"),
                ]
            }
        );
    }

    #[rstest]
    fn unknown_commit_is_not_found(store: Store) {
        let result = store.inspector().show_commit(&Digest::of(b"nowhere"));

        assert!(matches!(result, Err(RepositoryError::CommitNotFound(_))));
    }
}
