//! Git object model for the git-internals reader.
//!
//! An inflated loose object is `"<type> <size>\0<payload>"`. This crate splits
//! the header from the payload, decides the [`ObjectKind`] once, and decodes
//! the payload into a [`Blob`], [`Tree`] or [`Commit`].

mod blob;
mod commit;
pub mod header;
mod tree;

pub use blob::Blob;
pub use commit::Commit;
pub use tree::{Tree, TreeEntry};

use bstr::BString;
use git_hash::HashError;
use git_utils::ErrorKind;

/// Errors produced by object parsing. All of them mean the object is corrupt.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid object type: {0}")]
    InvalidKind(BString),

    #[error("invalid object header: {0}")]
    InvalidHeader(String),

    #[error("object size mismatch: header declares {declared} bytes, payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("invalid tree entry at offset {offset}: {reason}")]
    InvalidTreeEntry { offset: usize, reason: String },

    #[error("trailing {remaining} bytes at offset {offset} in tree")]
    TrailingTreeBytes { offset: usize, remaining: usize },

    #[error("invalid commit: missing '{field}' header")]
    MissingCommitField { field: &'static str },

    #[error(transparent)]
    Hash(#[from] HashError),
}

impl ObjectError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::CorruptObject
    }
}

/// The three object types the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    /// Parse from the type string in object headers.
    pub fn from_bytes(s: &[u8]) -> Result<Self, ObjectError> {
        match s {
            b"blob" => Ok(Self::Blob),
            b"tree" => Ok(Self::Tree),
            b"commit" => Ok(Self::Commit),
            _ => Err(ObjectError::InvalidKind(BString::from(s))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
        }
    }

    /// The banner printed above a rendered object, e.g. `*BLOB*`.
    pub fn banner(&self) -> String {
        format!("*{}*", self.as_str().to_ascii_uppercase())
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectKind {
    type Err = ObjectError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// A parsed git object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    /// Parse from inflated bytes (header + payload).
    ///
    /// The payload must be exactly as long as the header declares.
    pub fn parse(data: &[u8]) -> Result<Self, ObjectError> {
        let (kind, content_size, header_len) = header::parse_header(data)?;
        let content = &data[header_len..];
        if content.len() != content_size {
            return Err(ObjectError::SizeMismatch {
                declared: content_size,
                actual: content.len(),
            });
        }
        Self::parse_content(kind, content)
    }

    /// Parse a payload whose kind is already known.
    pub fn parse_content(kind: ObjectKind, content: &[u8]) -> Result<Self, ObjectError> {
        match kind {
            ObjectKind::Blob => Ok(Self::Blob(Blob::parse(content))),
            ObjectKind::Tree => Ok(Self::Tree(Tree::parse(content)?)),
            ObjectKind::Commit => Ok(Self::Commit(Commit::parse(content)?)),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Blob(_) => ObjectKind::Blob,
            Self::Tree(_) => ObjectKind::Tree,
            Self::Commit(_) => ObjectKind::Commit,
        }
    }
}
