use linked_bst::error::Error;
use linked_bst::linked::Tree;

fn floor_log2(n: usize) -> isize {
    (usize::BITS - 1 - n.leading_zeros()) as isize
}

fn ascending(tree: &Tree<i8>) -> Vec<i8> {
    tree.in_order().copied().collect()
}

/// The worked example threaded through the crate docs: insert
/// [5, 3, 8, 1, 4] and check every operation against hand-computed answers.
#[test]
fn worked_example() {
    let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();

    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.successor(&4), Some(&5));
    assert_eq!(tree.predecessor(&4), Some(&3));
    assert_eq!(tree.range_find(1, 5), [1, 3, 4, 5]);

    assert_eq!(tree.remove(&3), Ok(3));
    assert_eq!(tree.find(&3), None);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.predecessor(&4), Some(&1));

    tree.rebalance();
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let mut expected = xs.clone();
        expected.sort_unstable();

        tree.len() == xs.len() && ascending(&tree) == expected
    }

    fn every_added_item_is_found(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x) == Some(x))
    }

    fn removing_every_item_empties_the_tree(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        for x in &xs {
            if tree.remove(x) != Ok(*x) {
                return false;
            }
        }

        tree.is_empty() && tree.len() == 0 && xs.iter().all(|x| tree.find(x).is_none())
    }

    fn remove_missing_fails_and_changes_nothing(xs: Vec<i8>, probe: i8) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != probe).collect();
        let before = ascending(&tree);
        let len_before = tree.len();

        tree.remove(&probe) == Err(Error::NotFound)
            && tree.len() == len_before
            && ascending(&tree) == before
    }

    fn rebalance_preserves_the_multiset(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let mut expected = xs.clone();
        expected.sort_unstable();

        tree.rebalance();
        ascending(&tree) == expected && tree.len() == xs.len()
    }

    fn rebalance_minimizes_height(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        tree.rebalance();

        let expected = if xs.is_empty() { -1 } else { floor_log2(xs.len()) };
        tree.height() == expected
    }

    fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let once = ascending(tree.rebalance());
        let twice = ascending(tree.rebalance());

        once == twice
    }

    fn successor_is_tight(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        match tree.successor(&probe) {
            // Nothing stored lies strictly between the probe and its successor.
            Some(next) => *next > probe && !xs.iter().any(|x| *x > probe && x < next),
            None => xs.iter().all(|x| *x <= probe),
        }
    }

    fn predecessor_is_tight(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        match tree.predecessor(&probe) {
            Some(prev) => *prev < probe && !xs.iter().any(|x| *x < probe && x > prev),
            None => xs.iter().all(|x| *x >= probe),
        }
    }

    fn range_matches_a_filtered_in_order_walk(xs: Vec<i8>, a: i8, b: i8) -> bool {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let tree: Tree<i8> = xs.iter().copied().collect();

        let mut expected: Vec<i8> = xs.iter().copied().filter(|x| (low..=high).contains(x)).collect();
        expected.sort_unstable();

        tree.range(&low, &high).into_iter().copied().collect::<Vec<_>>() == expected
    }

    fn range_find_matches_membership(xs: Vec<i8>, a: i8, b: i8) -> bool {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let tree: Tree<i8> = xs.iter().copied().collect();

        let mut expected: Vec<i8> = xs.iter().copied().filter(|x| (low..=high).contains(x)).collect();
        expected.sort_unstable();
        expected.dedup();

        tree.range_find(low, high) == expected
    }

    fn preorder_visits_every_item(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let mut visited: Vec<i8> = tree.iter().copied().collect();
        visited.sort_unstable();

        let mut expected = xs.clone();
        expected.sort_unstable();
        visited == expected
    }
}
