//! Plain binary trees
//!
//! Three operations over an owned `TreeNode`:
//!   build_tree: level-order sequence -> tree
//!   invert_tree: mirror a tree in place, breadth-first
//!   serialize: tree -> level-order sequence, trailing absents trimmed
//!
//! All three walk the tree with an explicit `VecDeque` worklist; none of
//! them recurses.

mod builder;
mod invert;
mod node;
mod serialize;

pub use builder::build_tree;
pub use invert::invert_tree;
pub use node::TreeNode;
pub use serialize::serialize;

/// Number of nodes reachable from `root`
pub fn node_count(root: Option<&TreeNode>) -> usize {
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    let mut count = 0;

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_invert_serialize() {
        let values = [Some(4), Some(2), Some(7), Some(1), Some(3), Some(6), Some(9)];
        let root = invert_tree(build_tree(&values));

        assert_eq!(node_count(root.as_deref()), 7);
        assert_eq!(
            serialize(root.as_deref()),
            vec![Some(4), Some(7), Some(2), Some(9), Some(6), Some(3), Some(1)]
        );
    }

    #[test]
    fn test_node_count_empty() {
        assert_eq!(node_count(None), 0);
    }
}
