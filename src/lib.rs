//! Twig - a tree command that shows sizes, owners and permissions

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::{OutputConfig, SizeFormat, TreeFormatter};
pub use tree::{Aggregate, TreeNode, TreeWalker, WalkerConfig};
