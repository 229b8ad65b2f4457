use crate::errors::{RepositoryError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `target` with `content` in one step
///
/// The content goes to a temp file next to `target` which is then renamed
/// over it, so readers see either the old file or the new one.
pub fn write_atomically(target: &Path, content: &[u8]) -> Result<()> {
    let dir = target
        .parent()
        .ok_or_else(|| RepositoryError::io(target)(std::io::ErrorKind::NotFound.into()))?;
    let temp_path = dir.join(generate_temp_name());

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(RepositoryError::io(&temp_path))?;

    if let Err(e) = file.write_all(content).and_then(|_| file.sync_all()) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(RepositoryError::io(&temp_path)(e));
    }
    drop(file);

    std::fs::rename(&temp_path, target).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        RepositoryError::io(target)(e)
    })
}

/// Remove `path`, treating an already missing file as success
pub fn remove_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RepositoryError::io(path)(e)),
    }
}

fn generate_temp_name() -> PathBuf {
    PathBuf::from(format!("tmp-{}-{}", std::process::id(), rand::random::<u32>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_existing_content_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("HEAD");
        std::fs::write(&target, "old").unwrap();

        write_atomically(&target, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("absent").join("index");

        assert!(matches!(
            write_atomically(&target, b"[]"),
            Err(RepositoryError::StorageIo { .. })
        ));
    }

    #[test]
    fn removing_a_missing_file_succeeds() {
        let dir = TempDir::new().unwrap();

        remove_if_exists(&dir.path().join("COMMIT_PENDING")).unwrap();
    }
}
