//! This crate exposes [`OrderedTree`], an unbalanced Binary Search Tree (BST) of unique
//! elements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one
//! element and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants, searching for an element takes `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`) and visiting the
//! left subtree, then the subtree root, then the right subtree yields every element in
//! ascending order.
//!
//! `OrderedTree` does no rebalancing, so its shape depends only on the order elements were
//! inserted in. Sorted input gives a chain with a height of `N - 1`.
//!
//! ## Shape introspection
//!
//! Alongside the set operations, the tree can report on its own shape:
//! [`count`][OrderedTree::count], [`count_at_level`][OrderedTree::count_at_level],
//! [`max_depth`][OrderedTree::max_depth], [`min`][OrderedTree::min] and
//! [`max`][OrderedTree::max]. Two trees compare equal with
//! [`is_same_tree`][OrderedTree::is_same_tree] only when their shapes match too.
//!
//! ## Logging
//!
//! Inserts, clears and copies emit [`tracing`] events at `trace` and `debug` level. Element
//! values are never logged.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod tree;

pub use error::EmptyTreeError;
pub use iter::Iter;
pub use tree::OrderedTree;
