//! Level-order serialization
//!
//! Every visited node emits its value and queues both child slots, present
//! or not, so the raw output carries an absent marker for every missing
//! child. Only the trailing run of absent markers is trimmed; interior
//! markers are what make the output rebuildable.

use std::collections::VecDeque;

use tracing::debug;

use super::TreeNode;

/// Serialize a tree into its level-order sequence
///
/// The result never ends with `None`; an empty tree yields an empty vector.
pub fn serialize(root: Option<&TreeNode>) -> Vec<Option<i64>> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
    queue.push_back(Some(root));

    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                out.push(Some(node.val));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => out.push(None),
        }
    }

    let raw = out.len();
    while matches!(out.last(), Some(None)) {
        out.pop();
    }
    debug!(raw, trimmed = raw - out.len(), "serialized tree");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_empty() {
        assert!(serialize(None).is_empty());
    }

    #[test]
    fn test_serialize_single_node() {
        let root = TreeNode::new(1);
        assert_eq!(serialize(Some(&root)), vec![Some(1)]);
    }

    #[test]
    fn test_serialize_keeps_interior_absent_markers() {
        let mut root = TreeNode::new(1);
        root.right = Some(TreeNode::leaf(2));
        assert_eq!(serialize(Some(&root)), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_serialize_trims_trailing_markers() {
        let mut root = TreeNode::new(1);
        root.left = Some(TreeNode::leaf(2));
        // Raw walk is [1, 2, null, null, null]
        assert_eq!(serialize(Some(&root)), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_serialize_deeper_gap() {
        // 1 -> (2 -> (null, 4), 3)
        let mut two = TreeNode::leaf(2);
        two.right = Some(TreeNode::leaf(4));
        let mut root = TreeNode::new(1);
        root.left = Some(two);
        root.right = Some(TreeNode::leaf(3));

        assert_eq!(
            serialize(Some(&root)),
            vec![Some(1), Some(2), Some(3), None, Some(4)]
        );
    }
}
