//! Directory tree construction and traversal
//!
//! `TreeWalker` builds one immutable `TreeNode` graph per root: entries are
//! filtered (`FileFilter`), ordered (`sort_siblings`) and folded bottom-up
//! into each directory's `Aggregate`. `TreeNode::iter` then yields the nodes
//! in pre-order, each able to render its own branch prefix.

mod aggregate;
mod config;
mod entry;
mod filter;
mod node;
mod sort;
mod traversal;
mod walker;

// Re-export public types
pub use aggregate::Aggregate;
pub use config::WalkerConfig;
pub use entry::{Entry, EntryMetadata, FileId};
pub use filter::FileFilter;
pub use node::TreeNode;
pub use sort::sort_siblings;
pub use traversal::{BLANK, BRANCH, Iter, LAST_BRANCH, VERTICAL, render_prefix};
pub use walker::TreeWalker;
