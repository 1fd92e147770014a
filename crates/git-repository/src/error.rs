use std::path::PathBuf;

use git_utils::ErrorKind;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a git repository (or any of the parent directories): {0}")]
    NotFound(PathBuf),

    #[error("not a git directory: {path}: {reason}")]
    NotAGitDir { path: PathBuf, reason: String },

    #[error("invalid gitdir file {path}: {reason}")]
    InvalidGitFile { path: PathBuf, reason: String },
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}
