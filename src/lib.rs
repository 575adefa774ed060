//! # Iterative binary tree inversion
//!
//! Mirrors a binary tree (swaps left and right children at every node)
//! with a breadth-first worklist instead of recursion.
//!
//! ## Pieces
//!
//! 1. **Builder**: level-order sequence of `Option<i64>` -> owned tree
//! 2. **Inverter**: FIFO queue of `&mut TreeNode`, swap, enqueue children
//! 3. **Serializer**: tree -> level-order sequence, trailing `None`s trimmed
//!
//! ## Usage Example
//!
//! ```
//! use invert_tree::{build_tree, invert_tree, serialize};
//!
//! let tree = build_tree(&[Some(1), Some(2)]);
//! let tree = invert_tree(tree);
//! assert_eq!(serialize(tree.as_deref()), vec![Some(1), None, Some(2)]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod harness;     // Demonstration cases and reports
pub mod level_order; // Text form of level-order sequences
pub mod tree;        // Tree type, builder, inverter, serializer

// Re-exports for convenience
pub use harness::{default_cases, run_all, run_case, CaseReport};
pub use level_order::{LevelOrder, LevelOrderError};
pub use tree::{build_tree, invert_tree, node_count, serialize, TreeNode};
