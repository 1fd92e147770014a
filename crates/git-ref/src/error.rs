use std::path::PathBuf;

use git_utils::ErrorKind;

/// Error types for reference operations.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("invalid branch name: {0}")]
    InvalidName(String),

    #[error("branch not found: {0}")]
    NotFound(String),

    #[error("malformed ref {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error on {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RefError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName(_) | Self::NotFound(_) => ErrorKind::InvalidInput,
            Self::Malformed { .. } => ErrorKind::MalformedRef,
            Self::IoPath { .. } => ErrorKind::Io,
        }
    }
}
