//! Owned binary tree node
//!
//! Each node exclusively owns its children through `Option<Box<TreeNode>>`.
//! No sharing, no parent links, no cycles.

use std::fmt;

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

/// A single binary tree node
#[derive(Debug)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct TreeNode {
    /// Value stored at this node
    pub val: i64,

    /// Left subtree
    pub left: Option<Box<TreeNode>>,

    /// Right subtree
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a node without children
    pub fn new(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Boxed childless node, the form used for child slots
    pub fn leaf(val: i64) -> Box<Self> {
        Box::new(Self::new(val))
    }

    /// True when neither child is present
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl From<i64> for TreeNode {
    fn from(val: i64) -> Self {
        Self::new(val)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |child: &Option<Box<TreeNode>>| match child {
            Some(node) => node.val.to_string(),
            None => "null".to_string(),
        };
        write!(f, "{} -> ({}, {})", self.val, show(&self.left), show(&self.right))
    }
}

// Dropping a degenerate tree recursively would grow the call stack with its
// depth, so detach children onto a worklist instead.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
