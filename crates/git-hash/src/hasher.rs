//! SHA-1 naming of git objects.

use sha1::{Digest, Sha1};

use crate::{ObjectId, DIGEST_LEN};

/// Streaming SHA-1 over object bytes, finalized into an [`ObjectId`].
#[derive(Default)]
pub struct Hasher {
    inner: Sha1,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub fn finalize(self) -> ObjectId {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(self.inner.finalize().as_slice());
        ObjectId(bytes)
    }

    /// Hash raw bytes in one call. For a loose object these are the
    /// inflated `"<type> <size>\0<payload>"` bytes.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Hash a payload as git would name it: `"{kind} {len}\0{payload}"`.
    pub fn hash_object(kind: &str, payload: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(format!("{} {}\0", kind, payload.len()).as_bytes());
        h.update(payload);
        h.finalize()
    }
}
