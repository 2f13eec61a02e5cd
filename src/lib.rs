//! This crate exposes a few small, generic algorithms over binary trees and
//! sorted sequences.
//!
//! ## Binary trees
//!
//! A binary tree is defined recursively using the notion of a node. A
//! [`TreeNode`][tree::TreeNode] stores a value and owns up to two child
//! nodes, a left one and a right one.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! Trees are most easily written down in level order, the breadth-first
//! encoding used by coding-interview sites, and [`tree::create_tree`] builds
//! a tree from exactly that. Once built, a tree can be walked:
//!
//! * depth-first, visiting each node before its left subtree and its left
//!   subtree before its right subtree (preorder) while also being told when a
//!   node's subtrees are done (postorder), see [`traversal`];
//! * breadth-first, level by level, see [`traversal::bfs`].
//!
//! Depth-first traversal comes in a recursive and an iterative flavour. They
//! report exactly the same events; the iterative one keeps its stack on the
//! heap and so copes with trees deeper than the call stack.
//!
//! ## Bound search
//!
//! Given a sorted sequence, [`bound::lower_bound`] finds the first position
//! whose element is not before a value and [`bound::upper_bound`] the first
//! position whose element is after it. Everything between the two is
//! equivalent to the value. Both only need a "strictly less than"
//! comparator and both take `O(lg N)` comparisons.
//!
//! ## Numeric helpers
//!
//! [`mathex`] has rounding helpers that snap a number to an even or odd
//! integer.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bound;
pub mod mathex;
pub mod traversal;
pub mod tree;
