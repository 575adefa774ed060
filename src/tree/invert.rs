//! Breadth-first tree inversion
//!
//! Mirrors a tree without recursion: a FIFO worklist of mutable node
//! references replaces the call stack. Every node is visited once, its two
//! child handles are swapped, and the swapped children are queued left
//! before right.
//!
//! Time: O(n). Auxiliary space: the worklist, at most one level's width for
//! balanced trees and O(n) in the worst case.

use std::collections::VecDeque;
use std::mem;

use tracing::{debug, trace};

use super::TreeNode;

impl TreeNode {
    /// Swap left and right children at every node of this subtree, in place
    ///
    /// Values are untouched and no node is allocated or freed.
    pub fn invert(&mut self) {
        let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
        queue.push_back(self);
        let mut visited = 0usize;

        while let Some(node) = queue.pop_front() {
            mem::swap(&mut node.left, &mut node.right);
            visited += 1;
            trace!(pending = queue.len(), "swapped children at {}", node);

            if let Some(left) = node.left.as_deref_mut() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref_mut() {
                queue.push_back(right);
            }
        }

        debug!(visited, "inverted tree");
    }
}

/// Invert a tree, returning the same root
///
/// The returned box is the allocation that was passed in; only the child
/// links below it are rearranged. An empty tree stays empty.
pub fn invert_tree(root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    let mut root = root?;
    root.invert();
    Some(root)
}
