//! Branch and HEAD reading for the git-internals reader.
//!
//! Branches are loose ref files under `<git-dir>/refs/heads/`, each holding a
//! single commit id. `HEAD` names the checked-out branch with a
//! `ref: refs/heads/<name>` line. Everything is read fresh on every call.

mod error;
mod name;
mod store;

pub use error::RefError;
pub use name::BranchName;
pub use store::RefStore;

use git_hash::ObjectId;

/// What `HEAD` points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// A branch is checked out.
    Branch(BranchName),
    /// A commit is checked out directly.
    Detached(ObjectId),
}

impl Head {
    /// The checked-out branch, if any.
    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        }
    }
}

/// A branch and the commit it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: BranchName,
    pub head: ObjectId,
}

/// The branches under `refs/heads` and which one is current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchList {
    /// Name of the checked-out branch; `None` when `HEAD` is detached.
    pub current: Option<String>,
    /// Branch file names in directory listing order.
    pub names: Vec<String>,
}

impl BranchList {
    pub fn is_current(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }
}
