//! First-parent history walk.

use std::collections::HashSet;

use git_hash::ObjectId;
use git_loose::LooseObjectStore;
use git_object::Commit;
use tracing::{debug, trace};

use crate::RevWalkError;

/// One commit in log order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub oid: ObjectId,
    /// Set for the second parent of a merge. Such entries are reported but
    /// their own history is not followed.
    pub merged: bool,
    pub commit: Commit,
}

/// Iterator over the first-parent chain starting at a commit.
///
/// For a merge commit the walk yields the merge itself, then its second
/// parent flagged as `merged`, then continues with the first parent.
/// Parents beyond the second are ignored.
///
/// The first error ends the walk.
pub struct FirstParentWalk<'a> {
    store: &'a LooseObjectStore,
    next: Option<ObjectId>,
    pending_merge: Option<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl<'a> FirstParentWalk<'a> {
    pub fn new(store: &'a LooseObjectStore, start: ObjectId) -> Self {
        Self {
            store,
            next: Some(start),
            pending_merge: None,
            seen: HashSet::new(),
        }
    }

    fn fail(&mut self, err: RevWalkError) -> Option<Result<LogEntry, RevWalkError>> {
        self.next = None;
        self.pending_merge = None;
        Some(Err(err))
    }
}

impl Iterator for FirstParentWalk<'_> {
    type Item = Result<LogEntry, RevWalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(oid) = self.pending_merge.take() {
            return match self.store.read_commit(&oid) {
                Ok(commit) => {
                    trace!(%oid, "merged parent");
                    Some(Ok(LogEntry {
                        oid,
                        merged: true,
                        commit,
                    }))
                }
                Err(e) => self.fail(e.into()),
            };
        }

        let oid = self.next.take()?;
        if !self.seen.insert(oid) {
            return self.fail(RevWalkError::CommitCycle(oid));
        }

        let commit = match self.store.read_commit(&oid) {
            Ok(commit) => commit,
            Err(e) => return self.fail(e.into()),
        };
        trace!(%oid, parents = commit.parents.len(), "walked commit");

        self.next = commit.first_parent().copied();
        if commit.is_merge() {
            self.pending_merge = commit.merge_parent().copied();
        }

        Some(Ok(LogEntry {
            oid,
            merged: false,
            commit,
        }))
    }
}

/// Collect the whole first-parent log starting at `start`.
pub fn first_parent_log(
    store: &LooseObjectStore,
    start: ObjectId,
) -> Result<Vec<LogEntry>, RevWalkError> {
    let entries = FirstParentWalk::new(store, start).collect::<Result<Vec<_>, _>>()?;
    debug!(%start, count = entries.len(), "first-parent log complete");
    Ok(entries)
}
