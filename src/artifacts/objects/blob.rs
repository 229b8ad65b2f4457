//! Blob object
//!
//! A blob is the content of a file at staging time. It is stored byte for
//! byte, so its digest is the digest of the file content itself.

use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::errors::Result;
use bytes::Bytes;
use std::borrow::Cow;

/// File content addressed by its digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Blob {
            content: content.into(),
        }
    }

    /// Content as text; invalid UTF-8 sequences are replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

impl Packable for Blob {
    fn pack(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn unpack(_digest: &Digest, content: Bytes) -> Result<Self> {
        Ok(Blob::new(content))
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        self.text().into_owned()
    }
}
