//! Iterative tree resolution.
//!
//! Every entry of a tree is classified by probing the store: an entry whose
//! object is a tree becomes a nested [`TreeNode`], anything else (blobs,
//! gitlinks, objects missing from the store) stays a leaf. Nodes are kept in
//! an arena and expanded from an explicit work stack, so nesting depth never
//! touches the call stack.

use std::iter;

use bstr::{BString, ByteSlice};
use git_hash::ObjectId;
use git_loose::LooseObjectStore;
use git_object::{Tree, TreeEntry};
use tracing::{debug, trace};

use crate::RevWalkError;

/// Deepest directory nesting [`TreeResolver`] accepts by default.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// One directory in a resolved tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub oid: ObjectId,
    /// Entry name in the parent followed by `/`. Empty for the root.
    pub prefix: BString,
    /// Prefixes of every ancestor concatenated. Empty for the root.
    pub path: BString,
    /// Entries that are not trees, in tree order.
    pub leaves: Vec<TreeEntry>,
    /// Arena indices of nested directories, in tree order.
    pub subtrees: Vec<usize>,
    parent: Option<usize>,
    depth: usize,
}

impl TreeNode {
    fn new(oid: ObjectId, prefix: BString, path: BString, parent: Option<usize>, depth: usize) -> Self {
        Self {
            oid,
            prefix,
            path,
            leaves: Vec::new(),
            subtrees: Vec::new(),
            parent,
            depth,
        }
    }
}

/// A fully expanded tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTree {
    nodes: Vec<TreeNode>,
}

impl ResolvedTree {
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Nested directories of `node`, in tree order.
    pub fn subtrees<'a>(&'a self, node: &'a TreeNode) -> impl Iterator<Item = &'a TreeNode> + 'a {
        node.subtrees.iter().map(move |&i| &self.nodes[i])
    }

    /// Number of directories, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().map(|n| n.leaves.len()).sum()
    }

    /// Full paths of every leaf.
    ///
    /// Each directory lists its own leaves first, then each subdirectory in
    /// turn, depth first.
    pub fn summary_paths(&self) -> SummaryPaths<'_> {
        SummaryPaths {
            tree: self,
            stack: vec![0],
            current: None,
        }
    }
}

/// Iterator returned by [`ResolvedTree::summary_paths`].
pub struct SummaryPaths<'a> {
    tree: &'a ResolvedTree,
    stack: Vec<usize>,
    current: Option<(usize, usize)>,
}

impl Iterator for SummaryPaths<'_> {
    type Item = BString;

    fn next(&mut self) -> Option<BString> {
        loop {
            if let Some((idx, pos)) = self.current {
                let node = &self.tree.nodes[idx];
                if let Some(leaf) = node.leaves.get(pos) {
                    self.current = Some((idx, pos + 1));
                    let mut path = node.path.clone();
                    path.extend_from_slice(&leaf.name);
                    return Some(path);
                }
                self.stack.extend(node.subtrees.iter().rev());
                self.current = None;
            }
            let next = self.stack.pop()?;
            self.current = Some((next, 0));
        }
    }
}

/// Expands a root tree into a [`ResolvedTree`].
pub struct TreeResolver<'a> {
    store: &'a LooseObjectStore,
    max_depth: usize,
}

impl<'a> TreeResolver<'a> {
    pub fn new(store: &'a LooseObjectStore) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve the tree at `root`.
    ///
    /// `root` itself must exist and be a tree. Below it, a tree that appears
    /// among its own ancestors is reported as [`RevWalkError::TreeCycle`].
    pub fn resolve(&self, root: &ObjectId) -> Result<ResolvedTree, RevWalkError> {
        let tree = self.store.read_tree(root)?;
        let mut nodes = vec![TreeNode::new(*root, BString::default(), BString::default(), None, 0)];
        let mut work: Vec<(usize, Tree)> = vec![(0, tree)];

        while let Some((idx, tree)) = work.pop() {
            for entry in tree.entries {
                let Some(subtree) = self.store.try_read_tree(&entry.oid)? else {
                    nodes[idx].leaves.push(entry);
                    continue;
                };

                let mut prefix = entry.name;
                prefix.push(b'/');
                let mut path = nodes[idx].path.clone();
                path.extend_from_slice(&prefix);

                let mut ancestors = iter::successors(Some(idx), |&i| nodes[i].parent);
                if ancestors.any(|i| nodes[i].oid == entry.oid) {
                    return Err(RevWalkError::TreeCycle {
                        oid: entry.oid,
                        path,
                    });
                }
                let depth = nodes[idx].depth + 1;
                if depth > self.max_depth {
                    return Err(RevWalkError::TreeTooDeep {
                        limit: self.max_depth,
                        path,
                    });
                }

                trace!(oid = %entry.oid, path = %path.as_bstr(), "subtree");
                let child = nodes.len();
                nodes.push(TreeNode::new(entry.oid, prefix, path, Some(idx), depth));
                nodes[idx].subtrees.push(child);
                work.push((child, subtree));
            }
        }

        debug!(%root, directories = nodes.len(), "resolved tree");
        Ok(ResolvedTree { nodes })
    }
}
