//! Porcelain commands
//!
//! - `init`: create the store directory, HEAD and an empty index
//! - `add`: store file contents and stage them
//! - `commit`: record the staged entries and move HEAD
//! - `log`: print history from HEAD to the root commit
//! - `show`: print a commit's files compared with its parent

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
