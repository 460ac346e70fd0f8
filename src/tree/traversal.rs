//! Pre-order traversal and branch prefix rendering.
//!
//! Traversal reads the already-built tree only. It is a plain pull iterator,
//! so a consumer that stops early leaves nothing running behind it, and
//! calling `TreeNode::iter` again yields the same sequence.

use super::node::TreeNode;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const VERTICAL: &str = "│   ";
pub const BLANK: &str = "    ";

/// Pre-order iterator over a tree: a node, then each child's full subtree.
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a TreeNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the glyphs drawn before a node's name.
///
/// Every column `d < depth` gets a vertical connector when `d` is in
/// `continuation` and a blank otherwise, then the node's own column gets a
/// branch or last-branch glyph. Column 0 sits under the root, which is never
/// a continuation, so it is always blank. Depth 0 has no prefix.
pub fn render_prefix(depth: usize, continuation: &[usize], is_last: bool) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::with_capacity((depth + 1) * BLANK.len());
    for column in 0..depth {
        if continuation.contains(&column) {
            prefix.push_str(VERTICAL);
        } else {
            prefix.push_str(BLANK);
        }
    }
    prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    prefix
}
