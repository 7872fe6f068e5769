use ordered_forest::{default_less, equivalent, RbMap, TreeError};

fn next_pseudo(seed: &mut u64) -> i32 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*seed >> 33) % 101) as i32
}

#[test]
fn map_numbers_from_0_to_100_matrix() {
    let mut map = RbMap::<i32, i32>::new();
    for i in 0..=100 {
        map.insert(i, i);
        assert_eq!(map.len(), (i + 1) as usize);
    }
    map.assert_valid().unwrap();
    for i in 0..=100 {
        assert!(map.erase(&i));
        assert_eq!(map.len(), (100 - i) as usize);
    }
    assert!(map.is_empty());
}

#[test]
fn map_random_numbers_from_0_to_100_matrix() {
    let mut map = RbMap::<i32, i32>::new();
    let mut seed = 0x5EED_u64;
    for _ in 0..1_000 {
        let k = next_pseudo(&mut seed);
        map.insert(k, k * 2);
        map.assert_valid().unwrap();
    }
    for _ in 0..1_000 {
        let k = next_pseudo(&mut seed);
        let expected = map.get(&k).copied();
        assert_eq!(map.remove(&k), expected);
        map.assert_valid().unwrap();
    }
    let keys: Vec<_> = map.keys().copied().collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn map_lookup_matrix() {
    let mut map = RbMap::from([(1, "a"), (3, "c"), (5, "e")]);

    assert_eq!(map.get(&3), Some(&"c"));
    assert_eq!(map.get(&4), None);
    assert_eq!(map.get_key_value(&5), Some((&5, &"e")));
    assert!(map.contains_key(&1));
    assert_eq!(map.count(&2), 0);
    assert_eq!(map[&1], "a");

    *map.get_mut(&3).unwrap() = "C";
    assert_eq!(map.find(&3).value(), Some(&"C"));
    assert_eq!(map.first_key_value(), Some((&1, &"a")));
    assert_eq!(map.last_key_value(), Some((&5, &"e")));

    assert_eq!(map.lower_bound(&2).key(), Some(&3));
    assert_eq!(map.upper_bound(&3).key(), Some(&5));
    assert!(map.upper_bound(&5).is_end());
}

#[test]
fn map_insert_returns_cursor_matrix() {
    let mut map = RbMap::new();
    let (mut cursor, inserted) = map.insert("k", 1);
    assert!(inserted);
    *cursor.value_mut().unwrap() += 10;
    assert_eq!(map.get(&"k"), Some(&11));

    let (cursor, inserted) = map.insert("k", 99);
    assert!(!inserted);
    assert_eq!(cursor.get(), Some((&"k", &11)));

    let cursor = map.insert_hint(None, "j", 5);
    assert_eq!(cursor.key(), Some(&"j"));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["j", "k"]);
}

#[test]
fn map_remove_entry_and_pop_matrix() {
    let mut map: RbMap<i32, String> = (0..5).map(|i| (i, i.to_string())).collect();
    assert_eq!(map.remove_entry(&2), Some((2, "2".to_string())));
    assert_eq!(map.remove_entry(&2), None);
    assert_eq!(map.pop_first(), Some((0, "0".to_string())));
    assert_eq!(map.pop_last(), Some((4, "4".to_string())));
    assert_eq!(
        map.into_iter().collect::<Vec<_>>(),
        vec![(1, "1".to_string()), (3, "3".to_string())]
    );
}

#[test]
fn map_retain_and_for_each_mut_matrix() {
    let mut map: RbMap<i32, i32> = (0..50).map(|i| (i, i)).collect();
    map.for_each_mut(|_, v| *v *= 3);
    map.retain(|k, v| {
        *v += 1;
        k % 2 == 0
    });
    assert_eq!(map.len(), 25);
    assert_eq!(map.get(&10), Some(&31));
    assert_eq!(map.get(&11), None);
    map.assert_valid().unwrap();
}

#[test]
fn map_erase_range_matrix() {
    let mut map: RbMap<i32, ()> = (0..10).map(|i| (i, ())).collect();
    assert_eq!(map.erase_range(&3, &7), 4);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 7, 8, 9]);
    assert_eq!(map.erase_range(&7, &7), 0);
    map.assert_valid().unwrap();
}

#[test]
fn map_custom_comparator_matrix() {
    let mut map = RbMap::with_comparator(|a: &String, b: &String| a.len() < b.len());
    map.insert("aaa".to_string(), 3);
    map.insert("b".to_string(), 1);
    map.insert("cc".to_string(), 2);
    // Same length means equivalent keys.
    assert!(equivalent(map.comparator(), &"zz".to_string(), &"cc".to_string()));
    assert!(!map.insert("zz".to_string(), 20).1);
    assert_eq!(map.get(&"xx".to_string()), Some(&2));
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn map_capacity_matrix() {
    let mut map = RbMap::with_max_size(default_less::<u8>, 3);
    assert_eq!(map.max_size(), 3);
    assert_eq!(map.try_extend([(1, 'a'), (2, 'b'), (3, 'c')]), Ok(3));
    assert_eq!(
        map.try_insert(4, 'd').map(|(_, inserted)| inserted),
        Err(TreeError::CapacityExceeded { max_size: 3 })
    );
    assert!(map.erase(&2));
    assert!(map.try_insert(4, 'd').unwrap().1);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
}

#[test]
#[should_panic(expected = "node capacity exceeded")]
fn map_insert_past_capacity_panics_matrix() {
    let mut map = RbMap::with_max_size(default_less::<i32>, 1);
    map.insert(1, ());
    map.insert(2, ());
}

#[test]
fn map_get_or_insert_with_matrix() {
    let mut counts = RbMap::new();
    for word in ["b", "a", "b", "c", "b"] {
        *counts.get_or_insert_with(word, || 0) += 1;
    }
    assert_eq!(
        counts.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        vec![("a", 1), ("b", 3), ("c", 1)]
    );
}

#[test]
fn map_equality_and_ordering_matrix() {
    let a = RbMap::from([(1, 'x'), (2, 'y')]);
    let b = RbMap::from([(2, 'y'), (1, 'x')]);
    let c = RbMap::from([(1, 'x'), (2, 'z')]);
    assert_eq!(a, b);
    assert!(a < c);
    assert_eq!(a.cmp(&c), std::cmp::Ordering::Less);
    assert_eq!(format!("{a:?}"), "{1: 'x', 2: 'y'}");
}

#[test]
fn map_print_shows_colors_matrix() {
    let map = RbMap::from([(2, ()), (1, ()), (3, ())]);
    let out = map.print();
    assert!(out.starts_with("Node["));
    assert!(out.contains("black { 2 = () }"));
    assert_eq!(out.matches("red").count(), 2);
}
