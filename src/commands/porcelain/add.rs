use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::Result;
use futures::future::try_join_all;
use std::io::Write;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Store the current content of every file under `paths` and stage it
    ///
    /// Directories are expanded. If any file cannot be read or stored,
    /// nothing is staged.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        // Iterate over each provided path and expand it if it's a directory
        let files = paths
            .iter()
            .map(|path| self.workspace().list_files(Path::new(path)))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        // blobs are keyed by content, so their writes need no ordering
        let writes = files.into_iter().map(|path| {
            let workspace = self.workspace().clone();
            let database = self.database().clone();

            tokio::task::spawn_blocking(move || -> Result<IndexEntry> {
                let content = workspace.read_file(&path)?;
                let digest = database.put(&content)?;

                Ok(IndexEntry::new(Workspace::entry_name(&path), digest))
            })
        });

        let entries = try_join_all(writes)
            .await?
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let index = self.index();
        let mut index = index.lock().await;
        let _lock = self.lock_index(&mut index)?;

        index.stage_all(entries.iter().cloned())?;
        debug!(staged = entries.len(), "updated index");

        for entry in &entries {
            writeln!(self.writer(), "{}", entry.digest)?;
            writeln!(self.writer(), "Added {}", entry.path)?;
        }

        Ok(())
    }
}
