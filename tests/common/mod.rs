#![allow(dead_code)]

use invert_tree::{build_tree, LevelOrder, TreeNode};

/// Parse a level-order literal and build the tree it describes.
pub fn tree_from(text: &str) -> Option<Box<TreeNode>> {
    let values: LevelOrder = text.parse().expect("valid level-order literal");
    build_tree(&values)
}

/// Recursive mirror used as an oracle on small trees.
pub fn mirrored_copy(node: &TreeNode) -> Box<TreeNode> {
    let mut copy = TreeNode::leaf(node.val);
    copy.left = node.right.as_deref().map(mirrored_copy);
    copy.right = node.left.as_deref().map(mirrored_copy);
    copy
}

/// Degenerate tree where every node hangs off the previous node's left side.
pub fn left_chain(len: i64) -> Option<Box<TreeNode>> {
    let mut root: Option<Box<TreeNode>> = None;
    for val in (0..len).rev() {
        let mut node = TreeNode::leaf(val);
        node.left = root.take();
        root = Some(node);
    }
    root
}
