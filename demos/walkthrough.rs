//! Walks an `OrderedTree<i32>` through insert, lookup, in-place modification, display and clear,
//! printing the tree as it goes.
//!
//! Set `RUST_LOG=trace` to see the tree's own events on stderr.

use anyhow::{ensure, Context};
use ordered_tree::OrderedTree;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let mut tree = OrderedTree::new();

    for value in [20, 5, 5, 35, 0, 15, 30, 45] {
        let accepted = tree.insert(value);
        info!(value, accepted, "insert");
    }
    ensure!(tree.count() == 7, "expected 7 distinct elements");
    tree.display()?;

    let found = tree.retrieve_mut(&45).context("45 should be stored")?;
    *found = 100;
    ensure!(tree.retrieve(&100).is_some(), "45 should now read as 100");
    let found = tree.retrieve_mut(&100).context("100 should be stored")?;
    *found = 45;
    ensure!(tree.retrieve(&100).is_none(), "100 should be back to 45");
    info!("retrieve and modify in place");

    tree.display()?;
    info!(
        min = tree.min()?,
        max = tree.max()?,
        depth = ?tree.max_depth(),
        root_level = tree.count_at_level(0),
        "shape"
    );

    let copy = tree.clone();
    ensure!(tree.is_same_tree(&copy), "a copy is the same tree");

    tree.clear();
    ensure!(tree.is_empty(), "cleared tree should be empty");
    ensure!(!copy.is_empty(), "clearing the original leaves the copy alone");
    info!("clear");

    for value in [20, 5, 35] {
        tree.insert(value);
    }
    ensure!(!tree.is_empty(), "tree refilled");
    tree.display()?;

    Ok(())
}
