//! History and tree traversal over a loose object store.
//!
//! Two walks live here:
//! - [`FirstParentWalk`]: the log order, following first parents from a
//!   branch head and surfacing each merge's second parent as a side entry.
//! - [`TreeResolver`]: expands a root tree into a [`ResolvedTree`] of nested
//!   directories using an explicit work stack.

mod tree;
mod walk;

pub use tree::{ResolvedTree, SummaryPaths, TreeNode, TreeResolver, DEFAULT_MAX_DEPTH};
pub use walk::{first_parent_log, FirstParentWalk, LogEntry};

use bstr::BString;
use git_hash::ObjectId;
use git_loose::LooseError;
use git_utils::ErrorKind;

/// Errors from history and tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    #[error(transparent)]
    Store(#[from] LooseError),

    #[error("tree {oid} contains itself at '{path}'")]
    TreeCycle { oid: ObjectId, path: BString },

    #[error("tree nesting exceeds {limit} levels at '{path}'")]
    TreeTooDeep { limit: usize, path: BString },

    #[error("commit {0} is its own ancestor")]
    CommitCycle(ObjectId),
}

impl RevWalkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(e) => e.kind(),
            Self::TreeCycle { .. } | Self::TreeTooDeep { .. } | Self::CommitCycle(_) => {
                ErrorKind::CorruptObject
            }
        }
    }
}
