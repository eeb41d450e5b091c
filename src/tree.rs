//! An unbalanced BST of unique elements. Each element is its own key, so the tree behaves like an
//! ordered set whose shape is fixed by the order elements were inserted in.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.retrieve(&20), None);
//! assert!(tree.min().is_err());
//!
//! assert!(tree.insert(20));
//! assert!(tree.insert(5));
//! assert!(tree.insert(35));
//!
//! // Duplicates are turned away.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.count(), 3);
//!
//! assert_eq!(tree.retrieve(&35), Some(&35));
//! assert_eq!(tree.min(), Ok(&5));
//! assert_eq!(tree.max_depth(), Some(1));
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::EmptyTreeError;
use crate::iter::{Depths, Iter};
use crate::node::{Link, Node};

/// A Binary Search Tree holding unique elements. It never rebalances: inserting sorted input
/// produces a chain whose depth is one less than its length.
///
/// Every walk over the tree uses an explicit stack, so tall trees are fine to insert into, copy,
/// compare and drop.
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Deep-copies every node. The copy has the same shape as `self` and shares nothing with it.
    fn clone(&self) -> Self {
        let mut root = None;
        let copied = copy_subtree(self.root(), &mut root);
        debug!(copied, "deep-copied tree");

        Self { root }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they have the same shape and equal elements at every position. Two
/// trees holding the same elements but built in orders that give different shapes are not equal.
impl<T> PartialEq for OrderedTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.is_same_tree(other)
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `value` into the tree, returning whether it was accepted. If an equal element is
    /// already stored the tree is left untouched, `value` is dropped and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "rejected duplicate value");
                    return false;
                }
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        trace!(depth, "inserted value");
        true
    }

    /// Potentially finds the stored element equal to `target`. If no element compares equal,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.retrieve(&1), Some(&1));
    /// assert_eq!(tree.retrieve(&42), None);
    /// ```
    pub fn retrieve(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match target.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Like [`retrieve`][Self::retrieve] but hands back a mutable reference to the stored element.
    ///
    /// The caller must not change the element's position relative to the other elements in the
    /// tree. Doing so breaks the ordering the tree relies on and later lookups may miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(20);
    /// tree.insert(45);
    ///
    /// // 45 is the largest element so it can grow without moving.
    /// if let Some(found) = tree.retrieve_mut(&45) {
    ///     *found = 100;
    /// }
    /// assert_eq!(tree.retrieve(&100), Some(&100));
    /// assert_eq!(tree.retrieve(&45), None);
    /// ```
    pub fn retrieve_mut(&mut self, target: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref_mut();
        while let Some(node) = cursor {
            cursor = match target.cmp(&node.value) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element. Nodes are dropped in post-order so every node outlives its
    /// children. Clearing an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// tree.clear();
    /// assert_eq!(tree.count(), 0);
    /// ```
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut removed = 0usize;
        let mut pending = vec![root];
        while let Some(mut node) = pending.pop() {
            if node.is_leaf() {
                removed += 1;
                drop(node);
                continue;
            }

            // Revisit the node once both of its children are gone. Left is pushed last so it is
            // dropped first.
            let left = node.left.take();
            let right = node.right.take();
            pending.push(node);
            pending.extend(right);
            pending.extend(left);
        }
        debug!(removed, "cleared tree");
    }

    /// Counts the elements in the tree. This walks every node.
    pub fn count(&self) -> usize {
        self.depths().count()
    }

    /// Counts the nodes exactly `level` edges below the root (the root is level `0`).
    ///
    /// Descends with a count of levels still to go and stops at zero, so nothing deeper than
    /// `level` is visited. [`count_at_level_by_depth`][Self::count_at_level_by_depth] always
    /// agrees with this.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [20, 5, 35, 0, 15, 30, 45].into_iter().collect();
    ///
    /// assert_eq!(tree.count_at_level(0), 1);
    /// assert_eq!(tree.count_at_level(1), 2);
    /// assert_eq!(tree.count_at_level(2), 4);
    /// assert_eq!(tree.count_at_level(3), 0);
    /// ```
    pub fn count_at_level(&self, level: usize) -> usize {
        let mut found = 0;
        let mut pending: Vec<_> = self.root().map(|root| (root, level)).into_iter().collect();
        while let Some((node, remaining)) = pending.pop() {
            if remaining == 0 {
                found += 1;
            } else {
                pending.extend(node.children().map(|child| (child, remaining - 1)));
            }
        }
        found
    }

    /// Counts the nodes exactly `level` edges below the root, tracking the depth of each node
    /// from the top down instead of counting levels remaining.
    pub fn count_at_level_by_depth(&self, level: usize) -> usize {
        let mut found = 0;
        let mut pending: Vec<_> = self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            if depth == level {
                found += 1;
            } else {
                pending.extend(node.children().map(|child| (child, depth + 1)));
            }
        }
        found
    }

    /// The number of edges between the root and the deepest leaf, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.max_depth(), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.max_depth(), Some(0));
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.max_depth(), Some(2));
    /// ```
    pub fn max_depth(&self) -> Option<usize> {
        self.depths().map(|(_, depth)| depth).max()
    }

    /// The smallest element, found at the end of the leftmost path.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree is empty.
    pub fn min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest element, found at the end of the rightmost path.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree is empty.
    pub fn max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Checks that both trees have the same shape and hold equal elements at every position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [20, 5, 35].into_iter().collect();
    /// let same_shape: OrderedTree<_> = [20, 35, 5].into_iter().collect();
    /// let other_shape: OrderedTree<_> = [5, 20, 35].into_iter().collect();
    ///
    /// assert!(tree.is_same_tree(&tree.clone()));
    /// assert!(tree.is_same_tree(&same_shape));
    /// assert!(!tree.is_same_tree(&other_shape));
    /// ```
    pub fn is_same_tree(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut pending = vec![(self.root(), other.root())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(mine), Some(theirs)) if mine.value == theirs.value => {
                    pending.push((mine.right(), theirs.right()));
                    pending.push((mine.left(), theirs.left()));
                }
                _ => return false,
            }
        }
        true
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Writes every element to standard output, smallest first, one per line.
    ///
    /// # Errors
    ///
    /// Fails if writing to standard output fails.
    pub fn display(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let stdout = io::stdout();
        self.display_to(stdout.lock())
    }

    /// Writes every element to `out`, smallest first, one per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [20, 5, 35].into_iter().collect();
    ///
    /// let mut out = Vec::new();
    /// tree.display_to(&mut out).unwrap();
    /// assert_eq!(out, b"5\n20\n35\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first error `out` reports.
    pub fn display_to<W>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write,
    {
        for value in self {
            writeln!(out, "{}", value)?;
        }
        out.flush()
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub(crate) fn depths(&self) -> Depths<'_, T> {
        Depths::new(self.root())
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts each element in iteration order. Later duplicates are dropped.
impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Copies the subtree rooted at `source` into the empty slot `target`, returning how many nodes
/// were copied.
fn copy_subtree<T>(source: Option<&Node<T>>, target: &mut Link<T>) -> usize
where
    T: Clone,
{
    let mut copied = 0;
    let mut pending: Vec<(&Node<T>, &mut Link<T>)> =
        source.map(|n| (n, target)).into_iter().collect();
    while let Some((from, slot)) = pending.pop() {
        let node = slot.insert(Node::new_boxed(from.value.clone()));
        copied += 1;

        let Node { left, right, .. } = &mut **node;
        pending.extend(from.right().map(|n| (n, right)));
        pending.extend(from.left().map(|n| (n, left)));
    }
    copied
}
