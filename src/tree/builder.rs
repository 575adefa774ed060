//! Level-order tree construction
//!
//! Children of each materialized node are the next one or two elements of
//! the sequence. Absent elements occupy a slot but are never expanded, so
//! they contribute no child slots of their own.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::TreeNode;

/// Build a tree from its level-order sequence
///
/// Returns `None` for an empty sequence or one whose first element is
/// absent. Elements left over once every materialized node has been
/// expanded are ignored.
pub fn build_tree(values: &[Option<i64>]) -> Option<Box<TreeNode>> {
    let mut values = values.iter().copied();
    let mut root = TreeNode::leaf(values.next().flatten()?);
    let mut nodes = 1usize;

    {
        let mut pending: VecDeque<&mut TreeNode> = VecDeque::new();
        pending.push_back(&mut *root);

        while let Some(parent) = pending.pop_front() {
            let Some(left) = values.next() else { break };
            let right = values.next().flatten();

            parent.left = left.map(TreeNode::leaf);
            parent.right = right.map(TreeNode::leaf);

            if let Some(child) = parent.left.as_deref_mut() {
                trace!(val = child.val, "queued left child");
                pending.push_back(child);
                nodes += 1;
            }
            if let Some(child) = parent.right.as_deref_mut() {
                trace!(val = child.val, "queued right child");
                pending.push_back(child);
                nodes += 1;
            }
        }
    }

    debug!(nodes, "built tree from level order");
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        assert!(build_tree(&[]).is_none());
    }

    #[test]
    fn test_absent_root() {
        assert!(build_tree(&[None]).is_none());
        assert!(build_tree(&[None, Some(1), Some(2)]).is_none());
    }

    #[test]
    fn test_single_node() {
        let root = build_tree(&[Some(7)]).unwrap();
        assert_eq!(root.val, 7);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_complete_tree_shape() {
        let root = build_tree(&[Some(5), Some(3), Some(8), Some(1), Some(7)]).unwrap();
        let left = root.left.as_deref().unwrap();
        let right = root.right.as_deref().unwrap();

        assert_eq!(left.val, 3);
        assert_eq!(right.val, 8);
        assert_eq!(left.left.as_ref().map(|n| n.val), Some(1));
        assert_eq!(left.right.as_ref().map(|n| n.val), Some(7));
        assert!(right.is_leaf());
    }

    #[test]
    fn test_absent_nodes_take_no_child_slots() {
        // 1 has children (null, 2); 2 then takes 3 and 4 directly
        let root = build_tree(&[Some(1), None, Some(2), Some(3), Some(4)]).unwrap();
        assert!(root.left.is_none());

        let two = root.right.as_deref().unwrap();
        assert_eq!(two.val, 2);
        assert_eq!(two.left.as_ref().map(|n| n.val), Some(3));
        assert_eq!(two.right.as_ref().map(|n| n.val), Some(4));
    }

    #[test]
    fn test_zero_is_a_value() {
        let root = build_tree(&[Some(0), Some(0)]).unwrap();
        assert_eq!(root.left.as_ref().map(|n| n.val), Some(0));
        assert!(root.right.is_none());
    }

    #[test]
    fn test_surplus_values_ignored() {
        // Both children of the root are absent, nothing left to expand
        let root = build_tree(&[Some(1), None, None, Some(9)]).unwrap();
        assert!(root.is_leaf());
    }
}
