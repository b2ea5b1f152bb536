//! This crate collects a few classic in-memory data structures and
//! algorithms, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! The centrepiece is [`OrderedTree`], an unbalanced Binary Search Tree.
//! A BST is typically defined recursively using the notion of a `Node`. A
//! `Node` stores a value and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). Since this tree never
//! rebalances, that height can be anything from `O(lg N)` to `N`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## The rest
//!
//! - [`BinaryTree`], a binary tree with no ordering that fills up level by
//!   level.
//! - [`search`], binary search over sorted slices.
//! - [`sort`], selection sort.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
mod error;
pub mod node;
pub mod ordered;
pub mod search;
pub mod sort;


pub use binary::BinaryTree;
pub use error::{Error, Result};
pub use node::{Node, Order};
pub use ordered::OrderedTree;
