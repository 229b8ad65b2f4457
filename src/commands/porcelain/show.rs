use crate::areas::repository::Repository;
use crate::artifacts::inspect::{FileChange, FileInspection, Inspector};
use crate::artifacts::objects::digest::Digest;
use std::io::Write;

impl Repository {
    /// Print each file of a commit compared with the parent commit
    pub fn show(&self, digest: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let digest = Digest::try_parse(digest)?;
        let inspection =
            Inspector::new(self.database(), self.commit_graph()).show_commit(&digest)?;

        writeln!(self.writer(), "commit {}", inspection.commit.digest())?;
        writeln!(self.writer(), "Date:   {}", inspection.commit.timestamp())?;
        writeln!(self.writer())?;
        for message_line in inspection.commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        for file in &inspection.files {
            writeln!(self.writer())?;
            self.show_file(file)?;
        }

        Ok(())
    }

    fn show_file(&self, file: &FileInspection) -> anyhow::Result<()> {
        writeln!(self.writer(), "File: {}", file.path)?;

        match &file.change {
            FileChange::Initial { content } => {
                writeln!(self.writer(), "First commit. No parent to compare with.")?;
                self.show_content(content)?;
            }
            FileChange::Introduced { content } => {
                writeln!(self.writer(), "New file in this commit.")?;
                self.show_content(content)?;
            }
            FileChange::Modified { hunks } => {
                writeln!(self.writer(), "Diff:")?;
                for line in hunks.iter().flat_map(|hunk| hunk.to_colored_lines()) {
                    write!(self.writer(), "{}", line)?;
                }
                if hunks.last().is_some_and(|hunk| !hunk.text.ends_with('\n')) {
                    writeln!(self.writer())?;
                }
            }
        }

        Ok(())
    }

    fn show_content(&self, content: &str) -> anyhow::Result<()> {
        write!(self.writer(), "{}", content)?;
        if !content.is_empty() && !content.ends_with('\n') {
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
