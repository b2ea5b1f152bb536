use classic_ds::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len() && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.search(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted_input(xs: Vec<i32>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.size() == expected.len() && tree.in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn second_insert_is_a_no_op(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    tree.insert(x);

    let size = tree.size();
    let shape: Vec<i8> = tree.pre_order().into_iter().copied().collect();

    !tree.insert(x) && tree.size() == size && tree.pre_order().into_iter().eq(shape.iter())
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    fn sorted(mut values: Vec<&i16>) -> Vec<&i16> {
        values.sort_unstable();
        values
    }
    let in_order = tree.in_order();

    sorted(tree.pre_order()) == in_order
        && sorted(tree.post_order()) == in_order
        && sorted(tree.level_order()) == in_order
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
