use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;
use tracing::info;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            info!("{}", RepositoryError::AlreadyInitialized(self.path().to_path_buf()));
            writeln!(
                self.writer(),
                "Groot repository already initialized in {}",
                self.path().display()
            )?;

            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .map_err(RepositoryError::io(self.database().objects_path()))
            .context("Failed to create .groot/objects directory")?;

        self.refs()
            .init_head()
            .context("Failed to create initial HEAD")?;

        let index = self.index();
        let index = index.lock().await;
        if !index.path().exists() {
            index
                .write_updates()
                .context("Failed to create .groot/index file")?;
        }

        let path = self
            .path()
            .canonicalize()
            .unwrap_or_else(|_| self.path().to_path_buf());
        info!(path = %path.display(), "initialized repository");

        writeln!(
            self.writer(),
            "Initialized empty Groot repository in {}",
            path.display()
        )?;

        Ok(())
    }
}
