use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let content = self.workspace().read_file(Path::new(object_path))?;
        let blob = Blob::new(content);

        let digest = blob.digest()?;

        if write {
            self.ensure_initialized()?;
            self.database().store(&blob)?;
        }

        writeln!(self.writer(), "{}", digest)?;

        Ok(())
    }
}
