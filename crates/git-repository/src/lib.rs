//! Repository discovery and the store handle shared by every command.
//!
//! A [`Repository`] owns the loose object store and the ref store for one
//! git directory. Commands receive it by reference; nothing is global.

mod discover;
mod error;

pub use discover::{discover_git_dir, is_git_dir};
pub use error::RepoError;

use std::path::{Path, PathBuf};

use git_loose::LooseObjectStore;
use git_ref::RefStore;
use tracing::debug;

/// An opened git directory.
#[derive(Debug, Clone)]
pub struct Repository {
    git_dir: PathBuf,
    objects: LooseObjectStore,
    refs: RefStore,
}

impl Repository {
    /// Open a known git directory (the `.git` directory itself, or a bare repo).
    pub fn open(git_dir: impl AsRef<Path>) -> Result<Self, RepoError> {
        let git_dir = git_dir.as_ref();
        if !git_dir.is_dir() {
            return Err(RepoError::NotFound(git_dir.to_path_buf()));
        }
        if let Some(reason) = discover::layout_problem(git_dir) {
            return Err(RepoError::NotAGitDir {
                path: git_dir.to_path_buf(),
                reason: reason.into(),
            });
        }
        debug!(git_dir = %git_dir.display(), "opened repository");
        Ok(Self {
            git_dir: git_dir.to_path_buf(),
            objects: LooseObjectStore::open(git_dir.join("objects")),
            refs: RefStore::open(git_dir),
        })
    }

    /// Find and open the repository containing `start`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, RepoError> {
        let git_dir = discover_git_dir(start.as_ref())?;
        Self::open(git_dir)
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// The loose object store under `objects/`.
    pub fn objects(&self) -> &LooseObjectStore {
        &self.objects
    }

    pub fn refs(&self) -> &RefStore {
        &self.refs
    }
}
