//! Tree nodes produced by `TreeWalker`

use std::path::Path;
use std::time::SystemTime;

use super::aggregate::Aggregate;
use super::entry::Entry;
use super::traversal::{Iter, render_prefix};

/// One filesystem entry in a built tree.
///
/// Nodes are immutable once the walker returns them. Every field needed by a
/// formatter is captured at construction time, so rendering never touches
/// the filesystem again (except to resolve owner names).
#[derive(Debug, Clone)]
pub struct TreeNode {
    entry: Entry,
    depth: usize,
    sibling_index: usize,
    is_last: bool,
    continuation: Vec<usize>,
    children: Vec<TreeNode>,
    aggregate: Aggregate,
    listing_failed: bool,
}

/// Position of a node among its siblings.
#[derive(Debug, Clone)]
pub(crate) struct Placement {
    pub depth: usize,
    pub sibling_index: usize,
    pub is_last: bool,
    pub continuation: Vec<usize>,
}

impl Placement {
    pub fn root() -> Self {
        Self {
            depth: 0,
            sibling_index: 0,
            is_last: true,
            continuation: Vec::new(),
        }
    }

    /// Continuation depths inherited by this node's children: ours, plus our
    /// own depth when siblings follow us.
    pub fn child_continuation(&self) -> Vec<usize> {
        let mut continuation = self.continuation.clone();
        if !self.is_last {
            continuation.push(self.depth);
        }
        continuation
    }
}

impl TreeNode {
    /// Assemble a node from its entry and already-built children, folding
    /// the children's aggregates into its own.
    pub(crate) fn new(
        entry: Entry,
        placement: Placement,
        children: Vec<TreeNode>,
        listing_failed: bool,
    ) -> Self {
        let mut aggregate = if entry.is_dir() {
            Aggregate::dir()
        } else {
            Aggregate::file(entry.metadata.len)
        };
        for child in &children {
            aggregate.fold(&child.aggregate);
        }

        Self {
            entry,
            depth: placement.depth,
            sibling_index: placement.sibling_index,
            is_last: placement.is_last,
            continuation: placement.continuation,
            children,
            aggregate,
            listing_failed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.entry.path
    }

    /// Basename, or the path as given for a root.
    pub fn name(&self) -> String {
        if self.is_root() {
            self.entry.path.display().to_string()
        } else {
            self.entry.name.clone()
        }
    }

    pub fn display_name(&self, full_path: bool) -> String {
        if full_path {
            self.entry.path.display().to_string()
        } else {
            self.name()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    pub fn sibling_index(&self) -> usize {
        self.sibling_index
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Ancestor depths at which a vertical connector continues past this node.
    pub fn continuation_depths(&self) -> &[usize] {
        &self.continuation
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Branch glyphs drawn before this node's name. Empty for a root.
    pub fn prefix(&self) -> String {
        render_prefix(self.depth, &self.continuation, self.is_last)
    }

    /// Visit this node and all descendants in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir()
    }

    pub fn is_symlink(&self) -> bool {
        self.entry.metadata.is_symlink
    }

    pub fn is_executable(&self) -> bool {
        self.entry.metadata.is_executable()
    }

    /// Bytes in this subtree: the file's own size, or the sum over a directory.
    pub fn size(&self) -> u64 {
        self.aggregate.size
    }

    pub fn dir_count(&self) -> usize {
        self.aggregate.dirs
    }

    pub fn file_count(&self) -> usize {
        self.aggregate.files
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.entry.metadata.modified
    }

    pub fn permissions(&self) -> String {
        self.entry.metadata.permissions()
    }

    pub fn uid(&self) -> u32 {
        self.entry.metadata.uid
    }

    pub fn owner(&self) -> String {
        self.entry.metadata.owner()
    }

    /// True when this directory's contents could not be read.
    pub fn listing_failed(&self) -> bool {
        self.listing_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_continuation() {
        let root = Placement::root();
        assert!(root.child_continuation().is_empty());

        let middle = Placement {
            depth: 1,
            sibling_index: 0,
            is_last: false,
            continuation: Vec::new(),
        };
        assert_eq!(middle.child_continuation(), [1]);

        let last = Placement {
            depth: 2,
            sibling_index: 3,
            is_last: true,
            continuation: vec![1],
        };
        assert_eq!(last.child_continuation(), [1]);
    }
}
