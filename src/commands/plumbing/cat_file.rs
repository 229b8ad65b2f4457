use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::object::{Object, Unpackable};
use std::io::Write;

impl Repository {
    /// Print an object's stored bytes, or a readable form with `pretty`
    ///
    /// Objects carry no type header, so pretty printing tries the commit
    /// format first and falls back to blob text.
    pub fn cat_file(&mut self, digest: &str, pretty: bool) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let digest = Digest::try_parse(digest)?;
        let content = self.database().get(&digest)?;

        if !pretty {
            self.writer().write_all(&content)?;
            return Ok(());
        }

        let display = match Commit::unpack(&digest, content.clone()) {
            Ok(commit) => commit.display(),
            Err(_) => Blob::new(content).display(),
        };

        write!(self.writer(), "{}", display)?;
        if !display.ends_with('\n') {
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
