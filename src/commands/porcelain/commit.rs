use crate::areas::repository::Repository;
use chrono::{DateTime, Utc};
use std::io::Write;

impl Repository {
    /// Commit the staged entries with the current time
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.commit_at(message, Utc::now()).await
    }

    /// Commit the staged entries stamped with `timestamp`
    pub async fn commit_at(
        &mut self,
        message: &str,
        timestamp: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        let _lock = self.lock_index(&mut index)?;

        let staged = index.entries().to_vec();
        let parent = self.commit_graph().head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let record = self
            .commit_graph()
            .commit_at(message, staged, parent, timestamp, &mut index)?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            record.digest().to_short(),
            record.short_message()
        )?;

        Ok(())
    }
}
