use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::RepoError;

/// Whether `dir` has the layout the reader needs: `HEAD`, `objects/`, `refs/`.
pub fn is_git_dir(dir: &Path) -> bool {
    layout_problem(dir).is_none()
}

/// Describe the first missing piece of the git directory layout.
pub(crate) fn layout_problem(dir: &Path) -> Option<&'static str> {
    if !dir.join("HEAD").is_file() {
        Some("missing HEAD")
    } else if !dir.join("objects").is_dir() {
        Some("missing objects/")
    } else if !dir.join("refs").is_dir() {
        Some("missing refs/")
    } else {
        None
    }
}

/// Find the git directory for `start` by walking up the directory tree.
///
/// At each level, in order:
/// 1. a `.git/` directory
/// 2. a `.git` file containing `gitdir: <path>`
/// 3. the directory itself, if it is a bare git dir
pub fn discover_git_dir(start: &Path) -> Result<PathBuf, RepoError> {
    let start = fs::canonicalize(start).map_err(|_| RepoError::NotFound(start.to_path_buf()))?;

    let mut current = start.as_path();
    loop {
        let dot_git = current.join(".git");
        if dot_git.is_dir() && is_git_dir(&dot_git) {
            debug!(git_dir = %dot_git.display(), "found .git directory");
            return Ok(dot_git);
        }
        if dot_git.is_file() {
            let target = read_gitdir_file(&dot_git)?;
            let target = if target.is_absolute() {
                target
            } else {
                current.join(target)
            };
            debug!(git_dir = %target.display(), "followed .git file");
            return Ok(target);
        }
        if is_git_dir(current) {
            debug!(git_dir = %current.display(), "found bare git directory");
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(RepoError::NotFound(start)),
        }
    }
}

/// Parse a `.git` file: `gitdir: <path>`.
fn read_gitdir_file(path: &Path) -> Result<PathBuf, RepoError> {
    let content = fs::read_to_string(path).map_err(|e| RepoError::InvalidGitFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let target = content
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("gitdir:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RepoError::InvalidGitFile {
            path: path.to_path_buf(),
            reason: "expected 'gitdir: <path>'".into(),
        })?;
    Ok(PathBuf::from(target))
}
