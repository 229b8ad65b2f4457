//! Content digest (SHA-1 hash)
//!
//! Digests are 40-character lowercase hexadecimal strings. They name every
//! object in the store, so `objects/<digest>` is the object's file.

use crate::artifacts::objects::{DIGEST_LENGTH, SHORT_DIGEST_LENGTH};
use crate::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use sha1::{Digest as _, Sha1};
use std::str::FromStr;

/// Content digest identifying a stored object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Hash `content`; the same bytes always give the same digest
    pub fn of(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Digest(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate a digest from its hex form
    ///
    /// Upper-case hex is accepted and normalized.
    pub fn try_parse(id: impl Into<String>) -> Result<Self, RepositoryError> {
        let id = id.into();

        if id.len() != DIGEST_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RepositoryError::InvalidDigest(id));
        }

        Ok(Digest(id.to_ascii_lowercase()))
    }

    /// First seven characters, as shown by `commit`
    pub fn to_short(&self) -> &str {
        &self.0[..SHORT_DIGEST_LENGTH]
    }
}

impl TryFrom<String> for Digest {
    type Error = RepositoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Digest::try_parse(value)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl FromStr for Digest {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::try_parse(s)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
