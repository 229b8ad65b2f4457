//! Stored object types
//!
//! Every object is identified by the SHA-1 digest of its stored bytes:
//!
//! - **Blob**: raw file content, stored exactly as read from the workspace
//! - **Commit**: JSON record of the staged entries, message, timestamp and parent
//!
//! Objects carry no type header; the caller knows what it asked for.

pub mod blob;
pub mod commit;
pub mod digest;
pub mod object;

/// Length of a SHA-1 digest in hexadecimal format
pub const DIGEST_LENGTH: usize = 40;

/// Length of an abbreviated digest
pub const SHORT_DIGEST_LENGTH: usize = 7;
