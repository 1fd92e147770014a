use std::fs;
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use git_hash::ObjectId;
use tracing::debug;

use crate::error::RefError;
use crate::name::BranchName;
use crate::{Branch, BranchList, Head};

const HEAD_PREFIX: &str = "ref: refs/heads/";

/// Read-only access to `HEAD` and `refs/heads` in a git directory.
#[derive(Debug, Clone)]
pub struct RefStore {
    git_dir: PathBuf,
}

impl RefStore {
    pub fn open(git_dir: impl AsRef<Path>) -> Self {
        Self {
            git_dir: git_dir.as_ref().to_path_buf(),
        }
    }

    pub fn heads_dir(&self) -> PathBuf {
        self.git_dir.join("refs").join("heads")
    }

    /// Parse `HEAD`.
    ///
    /// Its first line must be `ref: refs/heads/<name>` or a bare commit id.
    pub fn head(&self) -> Result<Head, RefError> {
        let path = self.git_dir.join("HEAD");
        let line = read_first_line(&path)?;

        if let Some(name) = line.strip_prefix(HEAD_PREFIX) {
            let name = BranchName::new(name).map_err(|e| malformed(&path, e.to_string()))?;
            debug!(branch = %name, "HEAD points at branch");
            return Ok(Head::Branch(name));
        }
        if let Ok(oid) = ObjectId::from_hex(&line) {
            debug!(%oid, "HEAD is detached");
            return Ok(Head::Detached(oid));
        }
        Err(malformed(
            &path,
            format!("expected '{HEAD_PREFIX}<name>', got '{line}'"),
        ))
    }

    /// List the files directly under `refs/heads`, marking the current one.
    ///
    /// Names come back in the order the directory listing yields them.
    /// Sub-directories (namespaced branches such as `feature/x`) are skipped.
    pub fn list_branches(&self) -> Result<BranchList, RefError> {
        let current = self.head()?.branch().map(|b| b.as_str().to_owned());

        let dir = self.heads_dir();
        let entries = fs::read_dir(&dir).map_err(|source| RefError::IoPath {
            path: dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RefError::IoPath {
                path: dir.clone(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| RefError::IoPath {
                path: entry.path(),
                source,
            })?;
            if !file_type.is_file() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        debug!(count = names.len(), current = ?current, "listed branches");

        Ok(BranchList { current, names })
    }

    /// Read the commit a branch points to.
    pub fn branch(&self, name: &str) -> Result<Branch, RefError> {
        let name = BranchName::new(name)?;
        let path = self.heads_dir().join(name.as_str());
        if !path.is_file() {
            return Err(RefError::NotFound(name.to_string()));
        }

        let line = read_first_line(&path)?;
        let head = ObjectId::from_hex(&line)
            .map_err(|e| malformed(&path, format!("expected a commit id: {e}")))?;
        debug!(branch = %name, %head, "resolved branch");
        Ok(Branch { name, head })
    }
}

/// First line of a ref file, without its line terminator.
fn read_first_line(path: &Path) -> Result<String, RefError> {
    let contents = fs::read(path).map_err(|source| RefError::IoPath {
        path: path.to_path_buf(),
        source,
    })?;
    let first = contents.lines().next().unwrap_or_default();
    let first = first
        .to_str()
        .map_err(|_| malformed(path, "not valid UTF-8".into()))?
        .trim_end();
    if first.is_empty() {
        return Err(malformed(path, "empty".into()));
    }
    Ok(first.to_owned())
}

fn malformed(path: &Path, reason: String) -> RefError {
    RefError::Malformed {
        path: path.to_path_buf(),
        reason,
    }
}
