use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitRecord;
use std::io::Write;

impl Repository {
    /// Print the history from HEAD back to the root commit
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.commit_graph().head()?;

        for (position, record) in self.commit_graph().walk(head).enumerate() {
            if position > 0 {
                writeln!(self.writer())?;
            }
            self.show_commit_medium(&record?)?;
        }

        Ok(())
    }

    fn show_commit_medium(&self, record: &CommitRecord) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", record.digest())?;
        writeln!(self.writer(), "Date:   {}", record.timestamp())?;
        writeln!(self.writer())?;
        for message_line in record.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
