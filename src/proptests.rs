use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use super::{AvlMap, AvlSet, AvlTree};

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove(i16),
    PopFirst,
    PopLast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Insert),
        3 => any::<i16>().prop_map(Op::Remove),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

proptest! {
    #[test]
    fn set_matches_btree_set(ops in proptest::collection::vec(op(), 1..500)) {
        let mut set = AvlSet::new();
        let mut expected = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Insert(value) => prop_assert_eq!(set.insert(*value), expected.insert(*value)),
                Op::Remove(value) => prop_assert_eq!(set.remove(value), expected.remove(value)),
                Op::PopFirst => prop_assert_eq!(set.pop_first(), expected.pop_first()),
                Op::PopLast => prop_assert_eq!(set.pop_last(), expected.pop_last()),
            }
            set.check_consistency();
        }

        prop_assert_eq!(set.len(), expected.len());
        prop_assert!(set.iter().eq(expected.iter()));
        prop_assert!(set.iter().rev().eq(expected.iter().rev()));
    }

    #[test]
    fn map_matches_btree_map(entries in proptest::collection::vec((0u8..64, any::<u32>()), 0..300)) {
        let mut map = AvlMap::new();
        let mut expected = BTreeMap::new();

        for (key, value) in &entries {
            let inserted = map.insert(*key, *value);
            prop_assert_eq!(inserted, !expected.contains_key(key));
            expected.entry(*key).or_insert(*value);
            map.check_consistency();
        }

        prop_assert!(map.iter().eq(expected.iter()));
        for key in 0u8..64 {
            prop_assert_eq!(map.get(&key), expected.get(&key));
            prop_assert_eq!(map.lower_bound(&key).get().map(|(k, _)| *k), expected.range(key..).next().map(|(k, _)| *k));
        }
    }

    #[test]
    fn bounds_match_btree_set(values in proptest::collection::btree_set(any::<i32>(), 0..200), probe in any::<i32>()) {
        let tree: AvlTree<i32> = values.iter().copied().collect();
        tree.check_consistency();

        let lower = values.range(probe..).next();
        let upper = values.range((std::ops::Bound::Excluded(probe), std::ops::Bound::Unbounded)).next();
        prop_assert_eq!(tree.lower_bound(&probe).get(), lower);
        prop_assert_eq!(tree.upper_bound(&probe).get(), upper);
        prop_assert_eq!(tree.find(&probe).get(), values.get(&probe));
    }

    #[test]
    fn merge_moves_only_missing(
        lhs in proptest::collection::btree_set(0u16..512, 0..200),
        rhs in proptest::collection::btree_set(0u16..512, 0..200),
    ) {
        let mut tree: AvlTree<u16> = lhs.iter().copied().collect();
        let mut other: AvlTree<u16> = rhs.iter().copied().collect();
        tree.merge(&mut other);
        tree.check_consistency();
        other.check_consistency();

        prop_assert!(tree.iter().eq(lhs.union(&rhs)));
        prop_assert!(other.iter().eq(lhs.intersection(&rhs)));
        prop_assert_eq!(tree.len() + other.len(), lhs.len() + rhs.len());
    }

    #[test]
    fn cursor_walk_matches_iter(values in proptest::collection::vec(any::<i32>(), 0..300)) {
        let tree: AvlTree<i32> = values.into_iter().collect();

        let mut forward = Vec::new();
        let mut cursor = tree.begin();
        while let Some(value) = cursor.get() {
            forward.push(*value);
            cursor.move_next();
        }
        prop_assert!(forward.iter().eq(tree.iter()));

        let mut backward = Vec::new();
        let mut cursor = tree.end();
        for _ in 0..tree.len() {
            cursor.move_prev();
            backward.extend(cursor.get().copied());
        }
        prop_assert!(backward.iter().eq(tree.iter().rev()));
    }
}
