use classic_ds::BinaryTree;

use crate::Op;

/// Applies a set of operations to a tree and a vector holding the same multiset of values.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinaryTree<T>, model: &mut Vec<T>)
where
    T: PartialEq + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                model.push(v.clone());
            }
            Op::Remove(v) => {
                let expected = model
                    .iter()
                    .position(|x| x == v)
                    .map(|pos| model.swap_remove(pos));
                assert_eq!(tree.remove(v), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);

    let mut values: Vec<i8> = tree.level_order().into_iter().copied().collect();
    values.sort_unstable();
    model.sort_unstable();
    tree.size() == model.len() && values == model
}

#[quickcheck]
fn level_order_is_insertion_order(xs: Vec<u8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();

    tree.level_order().into_iter().eq(xs.iter())
}

#[quickcheck]
fn search_finds_first_in_level_order(xs: Vec<u8>, x: u8) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();

    tree.search(&x).map(|n| n.value()) == xs.iter().find(|v| **v == x)
        && tree.contains(&x) == xs.contains(&x)
}
