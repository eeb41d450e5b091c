//! Stack based walks over the nodes of an [`OrderedTree`][crate::OrderedTree].
//!
//! None of these recurse, so a degenerate tree (e.g. one built from sorted input) can be walked
//! no matter how tall it is.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the elements of an [`OrderedTree`][crate::OrderedTree] in ascending order.
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been fully pushed but which haven't been yielded yet. The top
    /// of the stack is always the next element.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Manual implementation of `Clone` so the iterator can be cloned even when `T` isn't.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Pre-order walk yielding every node along with its depth (the root is at depth 0).
pub(crate) struct Depths<'a, T> {
    pending: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> Depths<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            pending: root.map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Depths<'a, T> {
    type Item = (&'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.pending.pop()?;
        // Right first so the left subtree is visited first.
        self.pending.extend(node.right().map(|n| (n, depth + 1)));
        self.pending.extend(node.left().map(|n| (n, depth + 1)));
        Some((node, depth))
    }
}
