use thiserror::Error;

/// Returned by queries that need at least one element, such as
/// [`OrderedTree::min`][crate::OrderedTree::min], when the tree has none.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the tree is empty")]
pub struct EmptyTreeError;
