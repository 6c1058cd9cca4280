use avl_containers::{AvlMap, AvlSet};

fn main() {
    let mut map = AvlMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "deux");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&2), Some(&"two"));
    map.insert_or_assign(2, "deux");
    assert_eq!(map.get(&2), Some(&"deux"));
    map.remove(&1);
    assert!(map.get(&1).is_none());
    assert!(map.at(&1).is_err());

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut set = AvlSet::new();
    for x in 0..5 {
        set.insert(x);
    }
    assert!(set.contains(&1));
    set.remove(&1);
    assert!(!set.contains(&1));

    let mut other = AvlSet::from([1, 2, 7]);
    set.merge(&mut other);
    println!("merged {set:?}, left behind {other:?}");

    // Walk backwards from the one-past-the-end position
    let mut cursor = set.end();
    print!("{{ ");
    while cursor != set.begin() {
        cursor.move_prev();
        if let Some(x) = cursor.get() {
            print!("{x}, ");
        }
    }
    println!("}}");
}
