use ordered_tree::{EmptyTreeError, OrderedTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and clears the tree agrees with the set.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => bst.insert(x.clone()) == set.insert(x.clone()),
            Op::Retrieve(x) => bst.retrieve(x) == set.get(x),
            Op::Clear => {
                bst.clear();
                set.clear();
                bst.is_empty()
            }
        };
        if !agrees {
            return false;
        }
    }

    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.count() == set.len()
            && tree.is_empty() == set.is_empty()
            && tree.iter().eq(set.iter())
            && tree.min().ok() == set.iter().next()
            && tree.max().ok() == set.iter().next_back()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.retrieve(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        let before = tree.clone();

        xs.iter().all(|x| !tree.insert(*x)) && tree == before
    }
}

quickcheck::quickcheck! {
    fn copies_are_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let mut original: OrderedTree<_> = xs.iter().copied().collect();
        let mut copy = original.clone();
        let snapshot: Vec<_> = original.iter().copied().collect();

        copy.extend(extra.iter().copied());
        let original_unchanged = original.iter().copied().eq(snapshot.iter().copied());

        let copy_snapshot: Vec<_> = copy.iter().copied().collect();
        original.clear();
        let copy_unchanged = copy.iter().copied().eq(copy_snapshot);

        original_unchanged && copy_unchanged && original.is_empty()
    }
}

quickcheck::quickcheck! {
    fn insertion_order_sets_shape(xs: Vec<i8>) -> bool {
        // Re-inserting the same sequence always rebuilds the same shape.
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let rebuilt: OrderedTree<_> = xs.iter().copied().collect();

        tree.is_same_tree(&rebuilt) && tree.max_depth() == rebuilt.max_depth()
    }
}

quickcheck::quickcheck! {
    fn sorted_input_is_a_chain(len: u8) -> bool {
        let tree: OrderedTree<_> = (0..u16::from(len)).collect();

        match len {
            0 => tree.max_depth().is_none() && tree.min() == Err(EmptyTreeError),
            n => {
                tree.max_depth() == Some(usize::from(n) - 1)
                    && (0..usize::from(n)).all(|level| tree.count_at_level(level) == 1)
            }
        }
    }
}
