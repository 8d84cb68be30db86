use bstree::{BySign, Comparator, Order, Tree};
use quickcheck_macros::quickcheck;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.delete(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|node| node.data()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let in_order = tree.traverse(Order::InOrder);

    in_order.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicates_do_not_change_the_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.traverse(Order::PreOrder).into_iter().copied().collect();

    let none_inserted = xs.iter().all(|x| !tree.insert(*x));
    let after: Vec<i8> = tree.traverse(Order::PreOrder).into_iter().copied().collect();

    none_inserted && before == after
}

#[quickcheck]
fn delete_changes_len_by_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let present = tree.contains(&x);

    match tree.delete(&x) {
        Some(deleted) => present && deleted == x && tree.len() == len - 1 && !tree.contains(&x),
        None => !present && tree.len() == len,
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    [Order::PreOrder, Order::InOrder, Order::PostOrder]
        .iter()
        .all(|order| {
            let mut visited: Vec<_> = tree.traverse(*order);
            visited.sort();
            visited.into_iter().eq(tree.iter())
        })
}

#[quickcheck]
fn min_and_max_match_sorted_ends(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.find_min() == xs.iter().min() && tree.find_max() == xs.iter().max()
}

#[quickcheck]
fn reverse_comparator_mirrors_natural_order(xs: Vec<i8>) -> bool {
    let natural: Tree<_> = xs.iter().copied().collect();
    let mut reversed = Tree::with_comparator(BySign(|a: &i8, b: &i8| i64::from(*b) - i64::from(*a)));
    reversed.extend(xs.iter().copied());

    let mut expected = natural.traverse(Order::InOrder);
    expected.reverse();
    reversed.traverse(Order::InOrder) == expected && sorted_under_own_comparator(&reversed)
}

/// In-order yields strictly ascending values under the tree's own comparator.
fn sorted_under_own_comparator<T, C>(tree: &Tree<T, C>) -> bool
where
    C: Comparator<T>,
{
    tree.traverse(Order::InOrder)
        .windows(2)
        .all(|pair| tree.comparator().compare(pair[0], pair[1]) == Ordering::Less)
}
