use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;
use bytes::Bytes;

pub trait Packable {
    fn pack(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Rebuild the object stored under `digest` from its bytes
    fn unpack(digest: &Digest, content: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn display(&self) -> String;

    fn digest(&self) -> Result<Digest> {
        let content = self.pack()?;

        Ok(Digest::of(&content))
    }
}
