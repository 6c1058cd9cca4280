use std::collections::{BTreeMap, BTreeSet};

use avl_containers::{AvlMap, AvlSet, Error};

fn set_int() -> (AvlSet<i32>, BTreeSet<i32>) {
    let values = [4, 2, 6, 1, 3, 5, 7];
    (AvlSet::from(values), BTreeSet::from(values))
}

fn map_int() -> (AvlMap<i32, i32>, BTreeMap<i32, i32>) {
    let entries = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8), (8, 9)];
    (AvlMap::from(entries), BTreeMap::from(entries))
}

fn map_string() -> AvlMap<String, String> {
    [("baka", "mitai"), ("obon", "katsurage"), ("kokoro", "desu")]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn set_new_is_empty() {
    let set = AvlSet::<i32>::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.begin() == set.end());
    assert!(set.begin().get().is_none());
}

#[test]
fn set_from_array_is_sorted() {
    let (set, expected) = set_int();
    assert_eq!(set.len(), expected.len());
    assert!(set.iter().eq(expected.iter()));
    assert_eq!(format!("{set:?}"), format!("{expected:?}"));
}

#[test]
fn set_clone_is_deep() {
    let mut set: AvlSet<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
    let copy = set.clone();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(copy.len(), 3);
    assert!(copy.contains("two"));
}

#[test]
fn set_move_leaves_source_empty() {
    let (mut set, _) = set_int();
    let moved = std::mem::take(&mut set);
    assert!(set.is_empty());
    assert_eq!(moved.len(), 7);
}

#[test]
fn set_cursor_forward_and_back() {
    let (set, _) = set_int();
    let mut cursor = set.begin();
    assert_eq!(cursor.get(), Some(&1));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&2));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&3));

    let mut cursor = set.find(&7);
    assert_eq!(cursor.get(), Some(&7));
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&6));
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&5));
}

#[test]
fn set_insert_duplicate() {
    let mut set = AvlSet::new();
    assert!(set.insert(1));
    assert!(!set.insert(1));
    assert_eq!(set.len(), 1);
}

#[test]
fn set_erase_through_cursor() {
    let (mut set, mut expected) = set_int();
    let mut cursor = set.find_mut(&5);
    assert_eq!(cursor.remove_current(), Some(5));
    assert_eq!(cursor.get(), Some(&6));
    expected.remove(&5);
    assert_eq!(set.len(), expected.len());
    assert!(set.find(&5) == set.end());
}

#[test]
fn set_swap() {
    let (mut set, _) = set_int();
    let mut swapped = AvlSet::from([100, 101, 102]);
    set.swap(&mut swapped);
    assert!(set.iter().eq(&[100, 101, 102]));
    assert_eq!(swapped.len(), 7);
}

#[test]
fn set_find_and_contains() {
    let (set, _) = set_int();
    for value in 1..8 {
        assert!(set.find(&value) != set.end());
        assert!(set.find(&(value + 10)) == set.end());
        assert!(set.contains(&value));
        assert!(!set.contains(&(value + 10)));
    }
}

#[test]
fn set_merge() {
    let (mut set, mut expected) = set_int();
    let mut merged = AvlSet::from([1, 50, 60]);
    set.merge(&mut merged);
    expected.extend([50, 60]);
    assert!(set.iter().eq(expected.iter()));
    assert!(merged.iter().eq(&[1]));
}

#[test]
fn set_max_size() {
    let set = AvlSet::<i32>::new();
    assert!(set.max_size() > 1_000_000);
    assert_eq!(set.max_size(), AvlSet::<i32>::from([1, 2]).max_size());
}

#[test]
fn map_new_is_empty() {
    let map = AvlMap::<i32, i32>::new();
    assert!(map.is_empty());
    assert!(map.begin() == map.end());
    assert!(map.first_key_value().is_none());
}

#[test]
fn map_from_array_is_sorted() {
    let (map, expected) = map_int();
    assert!(map.iter().eq(expected.iter()));
    for key in 1..=8 {
        assert_eq!(map[&key], expected[&key]);
    }
    assert_eq!(format!("{map:?}"), format!("{expected:?}"));
}

#[test]
fn map_clone_is_deep() {
    let mut map = map_string();
    let copy = map.clone();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.get("kokoro").map(String::as_str), Some("desu"));
}

#[test]
fn map_erase_first() {
    let (mut map, mut expected) = map_int();
    map.begin_mut().remove_current();
    expected.pop_first();
    assert_eq!(map.len(), expected.len());
    assert_eq!(map.at(&1), Err(Error::NotFound));
    assert_eq!(map.first_key_value(), Some((&2, &3)));
}

#[test]
fn map_insert() {
    let mut map = AvlMap::new();
    assert!(map.insert(1, 2));
    assert_eq!(map[&1], 2);
    assert!(map.insert(5, 3));
    assert_eq!(map[&5], 3);
    assert!(!map.insert_or_assign(5, 10));
    assert_eq!(map[&5], 10);
}

#[test]
fn map_index_and_default() {
    let mut map = map_string();
    map.get_or_insert_default("sakura".to_string()).push_str("mochi");
    assert_eq!(map["sakura"], "mochi");
    map.get_or_insert_default("baka".to_string()).push('!');
    assert_eq!(map.at("baka"), Ok(&"mitai!".to_string()));
    assert_eq!(map.len(), 4);
}

#[test]
fn map_swap() {
    let (mut map, _) = map_int();
    let mut swapped = AvlMap::from([(100, 0), (101, 1), (102, 2)]);
    map.swap(&mut swapped);
    assert!(map.keys().eq(&[100, 101, 102]));
    assert_eq!(swapped.len(), 8);
}

#[test]
fn map_contains() {
    let (map, expected) = map_int();
    for key in expected.keys() {
        assert!(map.contains_key(key));
        assert!(!map.contains_key(&(key + 10)));
    }
}

#[test]
fn map_merge() {
    let (mut map, mut expected) = map_int();
    let mut merged = AvlMap::from([(1, 1), (50, 2), (60, 3)]);
    let mut merged_expected = BTreeMap::from([(1, 1), (50, 2), (60, 3)]);
    map.merge(&mut merged);
    merged_expected.retain(|key, _| expected.contains_key(key));
    expected.extend([(50, 2), (60, 3)]);

    assert!(map.iter().eq(expected.iter()));
    assert!(merged.iter().eq(merged_expected.iter()));
    assert_eq!(map[&1], 2);
}

#[test]
fn map_cursor_from_end() {
    let (map, _) = map_int();
    let mut cursor = map.end();
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&(8, 9)));
    assert_eq!(cursor.peek_next(), None);
    assert_eq!(cursor.peek_prev(), Some(&(7, 8)));
}

#[test]
fn map_remove() {
    let (mut map, _) = map_int();
    assert_eq!(map.remove(&4), Some(5));
    assert_eq!(map.remove(&4), None);
    assert_eq!(map.remove_entry(&5), Some((5, 6)));
    assert!(map.keys().eq(&[1, 2, 3, 6, 7, 8]));
}
