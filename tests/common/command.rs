use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use groot::artifacts::index::IndexEntry;
use rstest::fixture;
use std::path::Path;

pub const STORE_DIR: &str = ".groot";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_groot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository holding the two commits of a changed line:
/// `a.txt` committed as `line1\nline2\n`, then as `line1\nCHANGED\n`
#[fixture]
pub fn two_commits_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let file = init_repository_dir.path().join("a.txt");

    write_file(FileSpec::new(file.clone(), "line1\nline2\n".to_string()));
    run_groot_command(init_repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    groot_commit(init_repository_dir.path(), "first")
        .assert()
        .success();

    write_file(FileSpec::new(file, "line1\nCHANGED\n".to_string()));
    run_groot_command(init_repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    groot_commit(init_repository_dir.path(), "second")
        .assert()
        .success();

    init_repository_dir
}

pub fn run_groot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("groot").expect("Failed to find groot binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("GROOT_DIR");
    cmd.env_remove("GROOT_COMMIT_DATE");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

pub fn groot_commit(dir: &Path, message: &str) -> Command {
    run_groot_command(dir, &["commit", message])
}

pub fn get_head_digest(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(STORE_DIR).join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

pub fn read_index(dir: &Path) -> Vec<IndexEntry> {
    let content =
        std::fs::read_to_string(dir.join(STORE_DIR).join("index")).expect("Failed to read index");
    serde_json::from_str(&content).expect("Failed to parse index")
}

pub fn read_object(dir: &Path, digest: &str) -> Vec<u8> {
    std::fs::read(dir.join(STORE_DIR).join("objects").join(digest))
        .unwrap_or_else(|e| panic!("Failed to read object {digest}: {e}"))
}

pub fn read_commit_parent(dir: &Path, digest: &str) -> Option<String> {
    let commit: serde_json::Value =
        serde_json::from_slice(&read_object(dir, digest)).expect("Failed to parse commit");

    commit["parent"].as_str().map(str::to_string)
}
