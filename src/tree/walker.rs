//! TreeWalker - builds the full tree for a root in memory

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::WalkError;

use super::config::WalkerConfig;
use super::entry::{Entry, FileId};
use super::filter::FileFilter;
use super::node::{Placement, TreeNode};
use super::sort::sort_siblings;

/// Tree walker that builds one fully materialized tree per root.
///
/// Construction is depth-first and sequential. Aggregates are folded into
/// each directory as its children return, so a node is complete (and never
/// modified again) by the time its parent sees it.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = FileFilter::from_config(&config);
        Self { config, filter }
    }

    /// Build the tree rooted at `root`.
    ///
    /// The root itself is stat'd without following symlinks and is never
    /// filtered, so an explicitly requested hidden path is still shown.
    pub fn walk(&self, root: &Path) -> Result<TreeNode, WalkError> {
        let entry = Entry::lstat(root).map_err(|source| WalkError::PathUnreadable {
            path: root.to_path_buf(),
            source,
        })?;
        let entry = if self.config.follow_symlinks {
            entry.follow()
        } else {
            entry
        };

        let mut ancestors = Vec::new();
        let node = self.walk_dir(entry, Placement::root(), &mut ancestors);
        debug!(
            root = %root.display(),
            dirs = node.dir_count(),
            files = node.file_count(),
            bytes = node.size(),
            "built tree"
        );
        Ok(node)
    }

    /// Build trees for several roots, one at a time as the iterator is pulled.
    pub fn walk_all<I, P>(&self, roots: I) -> impl Iterator<Item = Result<TreeNode, WalkError>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        roots
            .into_iter()
            .map(move |root| self.walk(root.as_ref()))
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn walk_dir(
        &self,
        entry: Entry,
        placement: Placement,
        ancestors: &mut Vec<FileId>,
    ) -> TreeNode {
        // Files, unfollowed symlinks and depth-limited directories are leaves
        if !entry.is_dir() || self.at_max_depth(placement.depth) {
            return TreeNode::new(entry, placement, Vec::new(), false);
        }

        let tracked_id = if self.config.follow_symlinks {
            entry.dir_id()
        } else {
            None
        };
        if let Some(id) = tracked_id {
            if ancestors.contains(&id) {
                warn!(path = %entry.path.display(), "symlink cycle, not descending");
                return TreeNode::new(entry, placement, Vec::new(), false);
            }
        }

        let entries = match self.read_entries(&entry.path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("{}", err);
                return TreeNode::new(entry, placement, Vec::new(), true);
            }
        };

        if let Some(id) = tracked_id {
            ancestors.push(id);
        }

        let continuation = placement.child_continuation();
        let total = entries.len();
        let mut children = Vec::with_capacity(total);
        for (i, child) in entries.into_iter().enumerate() {
            let child_placement = Placement {
                depth: placement.depth + 1,
                sibling_index: i,
                is_last: i + 1 == total,
                continuation: continuation.clone(),
            };
            children.push(self.walk_dir(child, child_placement, ancestors));
        }

        if tracked_id.is_some() {
            ancestors.pop();
        }

        TreeNode::new(entry, placement, children, false)
    }

    /// Read, filter, and sort directory entries
    fn read_entries(&self, path: &Path) -> Result<Vec<Entry>, WalkError> {
        let listing = fs::read_dir(path).map_err(|source| WalkError::DirectoryListingFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<_> = listing
            .filter_map(|item| match item.and_then(|e| Entry::from_dir_entry(&e)) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    // Usually an entry removed between listing and stat
                    debug!(dir = %path.display(), error = %err, "skipping entry");
                    None
                }
            })
            .map(|entry| {
                if self.config.follow_symlinks {
                    entry.follow()
                } else {
                    entry
                }
            })
            .collect();

        let mut entries = self.filter.apply(entries);
        sort_siblings(&mut entries, self.config.dirs_first);
        Ok(entries)
    }
}
