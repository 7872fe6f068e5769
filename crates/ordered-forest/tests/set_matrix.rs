use ordered_forest::{default_less, RbSet, TreeError};

fn items<C: Fn(&i32, &i32) -> bool>(set: &RbSet<i32, C>) -> Vec<i32> {
    set.iter().copied().collect()
}

#[test]
fn set_insert_then_erase_root_scenario_matrix() {
    let mut set = RbSet::new();
    for k in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
        assert!(set.insert(k).1);
        set.assert_valid().unwrap();
    }
    assert_eq!(items(&set), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(set.erase(&5), 1);
    assert_eq!(items(&set), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    assert_eq!(set.len(), 8);
    assert!(set.find(&5).is_end());
    assert_eq!(set.find(&5), set.end());
    set.assert_valid().unwrap();
}

#[test]
fn set_empty_erase_scenario_matrix() {
    let mut set = RbSet::<i32>::new();
    assert_eq!(set.erase(&42), 0);
    assert!(!set.remove(&42));
    assert_eq!(set.begin(), set.end());
    assert_eq!(set.rbegin(), set.rend());
    assert!(set.is_empty());
    set.assert_valid().unwrap();
}

#[test]
fn set_duplicate_insert_is_idempotent_matrix() {
    let mut set = RbSet::from([10, 20, 30]);
    let before = items(&set);
    let (cursor, inserted) = set.insert(20);
    assert!(!inserted);
    assert_eq!(cursor.key(), Some(&20));
    assert_eq!(items(&set), before);
    assert_eq!(set.len(), 3);
}

#[test]
fn set_bounds_matrix() {
    let set: RbSet<i32> = (0..10).map(|i| i * 10).collect();

    assert_eq!(set.lower_bound(&30).key(), Some(&30));
    assert_eq!(set.upper_bound(&30).key(), Some(&40));
    assert_eq!(set.lower_bound(&35).key(), Some(&40));
    assert_eq!(set.upper_bound(&35).key(), Some(&40));
    assert_eq!(set.lower_bound(&-5).key(), Some(&0));
    assert!(set.lower_bound(&91).is_end());
    assert!(set.upper_bound(&90).is_end());

    let (lo, hi) = set.equal_range(&50);
    assert_eq!(lo.key(), Some(&50));
    assert_eq!(hi.key(), Some(&60));
    let (lo, hi) = set.equal_range(&55);
    assert_eq!(lo, hi);

    assert_eq!(set.count(&70), 1);
    assert_eq!(set.count(&71), 0);
}

#[test]
fn set_erase_range_matrix() {
    let mut set: RbSet<i32> = (0..20).collect();
    assert_eq!(set.erase_range(&5, &15), 10);
    assert_eq!(items(&set), (0..5).chain(15..20).collect::<Vec<_>>());
    assert_eq!(set.erase_range(&15, &5), 0);
    assert_eq!(set.erase_range(&100, &200), 0);
    assert_eq!(set.erase_range(&-10, &3), 3);
    assert_eq!(items(&set), vec![3, 4, 15, 16, 17, 18, 19]);
    set.assert_valid().unwrap();
}

#[test]
fn set_pop_and_take_matrix() {
    let mut set = RbSet::from([4, 2, 6]);
    assert_eq!(set.first(), Some(&2));
    assert_eq!(set.last(), Some(&6));
    assert_eq!(set.pop_first(), Some(2));
    assert_eq!(set.pop_last(), Some(6));
    assert_eq!(set.take(&4), Some(4));
    assert_eq!(set.take(&4), None);
    assert_eq!(set.pop_first(), None);
}

#[test]
fn set_retain_and_clear_matrix() {
    let mut set: RbSet<i32> = (0..100).collect();
    set.retain(|k| k % 7 == 0);
    assert_eq!(items(&set), (0..100).filter(|k| k % 7 == 0).collect::<Vec<_>>());
    set.assert_valid().unwrap();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
    set.insert(1);
    assert_eq!(items(&set), vec![1]);
}

#[test]
fn set_try_extend_is_all_or_nothing_matrix() {
    let mut set = RbSet::with_max_size(default_less::<i32>, 5);
    set.extend([1, 2, 3]);

    let err = set.try_extend([4, 5, 6]).unwrap_err();
    assert_eq!(err, TreeError::CapacityExceeded { max_size: 2 });
    assert_eq!(items(&set), vec![1, 2, 3]);

    assert_eq!(set.try_extend([3, 4, 1, 5, 4]), Ok(2));
    assert_eq!(items(&set), vec![1, 2, 3, 4, 5]);
    assert!(set.try_insert(6).is_err());
    assert!(!set.try_insert(5).unwrap().1);
    set.assert_valid().unwrap();
}

#[test]
fn set_clone_compare_swap_matrix() {
    let a = RbSet::from([1, 2, 3]);
    let mut b = a.clone();
    assert_eq!(a, b);
    b.insert(4);
    assert_ne!(a, b);
    assert!(a < b);

    let mut c = RbSet::from([9]);
    std::mem::swap(&mut b, &mut c);
    assert_eq!(items(&b), vec![9]);
    assert_eq!(items(&c), vec![1, 2, 3, 4]);
    assert!(c < b);
}

#[test]
fn set_find_mut_removes_matrix() {
    let mut set = RbSet::from([1, 2, 3]);
    let mut cursor = set.find_mut(&2);
    assert_eq!(cursor.remove_current(), Some((2, ())));
    assert_eq!(cursor.key(), Some(&3));
    assert_eq!(items(&set), vec![1, 3]);

    let mut cursor = set.find_mut(&7);
    assert!(cursor.is_end());
    assert_eq!(cursor.remove_current(), None);
}

#[test]
fn set_owned_iteration_matrix() {
    let set = RbSet::from([3, 1, 2]);
    assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(set.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn set_debug_matrix() {
    let set = RbSet::from([2, 1]);
    assert_eq!(format!("{set:?}"), "{1, 2}");
}
