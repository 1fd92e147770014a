use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;
use git_hash::hasher::Hasher;
use git_hash::ObjectId;
use git_object::header;
use git_object::{Commit, Object, ObjectKind, Tree};
use tracing::{debug, trace};

use crate::{LooseError, LooseObjectStore};

/// Longest header we accept: `"commit "` plus a 20-digit size and the NUL
/// fit comfortably.
const MAX_HEADER_LEN: usize = 64;

impl LooseObjectStore {
    /// Check if a loose object exists.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }

    /// Read and inflate the object file for `oid`.
    ///
    /// Returns the uncompressed `"<type> <size>\0<payload>"` bytes.
    pub fn read_raw(&self, oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
        let compressed = self.read_compressed(oid)?;
        let raw = inflate_all(&compressed, oid)?;
        trace!(%oid, compressed = compressed.len(), inflated = raw.len(), "inflated loose object");
        Ok(raw)
    }

    /// Read and parse a loose object.
    pub fn read(&self, oid: &ObjectId) -> Result<Object, LooseError> {
        let raw = self.read_raw(oid)?;
        parse(&raw, oid)
    }

    /// Read a loose object and check that its bytes hash to `oid`.
    pub fn read_verified(&self, oid: &ObjectId) -> Result<Object, LooseError> {
        let raw = self.read_raw(oid)?;
        let actual = Hasher::digest(&raw);
        if actual != *oid {
            return Err(LooseError::HashMismatch {
                path: self.object_path(oid),
                expected: *oid,
                actual,
            });
        }
        parse(&raw, oid)
    }

    /// Read just the header (kind + size), inflating only the first bytes.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    pub fn read_header(&self, oid: &ObjectId) -> Result<Option<(ObjectKind, usize)>, LooseError> {
        let compressed = match self.read_compressed(oid) {
            Ok(data) => data,
            Err(LooseError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut decoder = ZlibDecoder::new(&compressed[..]);
        let mut buf = [0u8; MAX_HEADER_LEN];
        let mut filled = 0;

        loop {
            if filled >= buf.len() {
                return Err(LooseError::Corrupt {
                    oid: *oid,
                    reason: format!("header exceeds {MAX_HEADER_LEN} bytes"),
                });
            }
            let n = decoder
                .read(&mut buf[filled..])
                .map_err(|source| LooseError::Decompress { oid: *oid, source })?;
            if n == 0 {
                return Err(LooseError::Corrupt {
                    oid: *oid,
                    reason: "unexpected EOF before header null terminator".into(),
                });
            }
            filled += n;
            if buf[..filled].contains(&0) {
                break;
            }
        }

        let (kind, size, _) = header::parse_header(&buf[..filled])
            .map_err(|source| LooseError::Parse { oid: *oid, source })?;
        Ok(Some((kind, size)))
    }

    /// Read an object that must be a commit.
    pub fn read_commit(&self, oid: &ObjectId) -> Result<Commit, LooseError> {
        match self.read(oid)? {
            Object::Commit(commit) => Ok(commit),
            other => Err(unexpected(oid, ObjectKind::Commit, other.kind())),
        }
    }

    /// Read an object that must be a tree.
    pub fn read_tree(&self, oid: &ObjectId) -> Result<Tree, LooseError> {
        match self.read(oid)? {
            Object::Tree(tree) => Ok(tree),
            other => Err(unexpected(oid, ObjectKind::Tree, other.kind())),
        }
    }

    /// Read `oid` as a tree if it is one.
    ///
    /// A missing object or an object of another kind is `Ok(None)`; only a
    /// tree that exists but fails to decode is an error. Non-tree objects
    /// are never fully inflated.
    pub fn try_read_tree(&self, oid: &ObjectId) -> Result<Option<Tree>, LooseError> {
        match self.read_header(oid)? {
            Some((ObjectKind::Tree, _)) => self.read_tree(oid).map(Some),
            Some((kind, _)) => {
                trace!(%oid, %kind, "not a tree");
                Ok(None)
            }
            None => {
                debug!(%oid, "tree entry object missing from store");
                Ok(None)
            }
        }
    }

    fn read_compressed(&self, oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
        let path = self.object_path(oid);
        debug!(%oid, path = %path.display(), "reading loose object");
        read_file(&path, oid)
    }
}

fn read_file(path: &Path, oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LooseError::NotFound { oid: *oid })
        }
        Err(source) => Err(LooseError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Zlib-decompress the full contents of a loose object file.
fn inflate_all(compressed: &[u8], oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|source| LooseError::Decompress { oid: *oid, source })?;
    Ok(inflated)
}

fn parse(raw: &[u8], oid: &ObjectId) -> Result<Object, LooseError> {
    Object::parse(raw).map_err(|source| LooseError::Parse { oid: *oid, source })
}

fn unexpected(oid: &ObjectId, expected: ObjectKind, actual: ObjectKind) -> LooseError {
    LooseError::UnexpectedKind {
        oid: *oid,
        expected,
        actual,
    }
}
