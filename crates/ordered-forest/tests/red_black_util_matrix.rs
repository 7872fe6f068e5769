use ordered_forest::red_black::{assert_red_black_tree, find, insert, remove, RbNode};
use ordered_forest::util::size;
use ordered_forest::{default_less, Arena};

type RbArena = Arena<RbNode<i32, i32>>;

fn insert_value(arena: &mut RbArena, root: &mut Option<u32>, value: i32) {
    let idx = arena.allocate(RbNode::new(value, value)).unwrap();
    let _ = insert(arena, root, idx, &default_less::<i32>);
    if let Err(err) = assert_red_black_tree(arena, *root, &default_less::<i32>) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
}

fn delete_value(arena: &mut RbArena, root: &mut Option<u32>, value: i32) {
    if let Some(idx) = find(arena, *root, &value, &default_less::<i32>) {
        let node = remove(arena, root, idx);
        assert_eq!(node.k, value);
        if let Err(err) = assert_red_black_tree(arena, *root, &default_less::<i32>) {
            panic!("invalid red-black tree after delete({value}): {err}");
        }
    }
}

#[test]
fn rb_util_insert_delete_various_numbers_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut arena, &mut root, value);
    }
    assert_eq!(size(&arena, root), 13);

    delete_value(&mut arena, &mut root, 100);
    assert_eq!(size(&arena, root), 12);

    delete_value(&mut arena, &mut root, 33);
    delete_value(&mut arena, &mut root, 33);
    assert_eq!(size(&arena, root), 11);

    delete_value(&mut arena, &mut root, 10);
    assert_eq!(size(&arena, root), 10);

    delete_value(&mut arena, &mut root, 60);
    assert_eq!(size(&arena, root), 9);

    delete_value(&mut arena, &mut root, 22);
    assert_eq!(size(&arena, root), 8);
    assert_eq!(arena.len(), 8);
}

#[test]
fn rb_util_numbers_from_0_to_100_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert!(root.is_none());
    assert!(arena.is_empty());
}

#[test]
fn rb_util_descending_delete_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, 100 - i);
    }
    for i in (0..=100).rev() {
        delete_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), i as usize);
    }
}

#[test]
fn rb_util_numbers_both_directions_from_50_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for i in 1..=100 {
        insert_value(&mut arena, &mut root, 50 + i);
        insert_value(&mut arena, &mut root, 50 - i);
        assert_eq!(size(&arena, root), (i * 2) as usize);
    }
    for i in 1..=100 {
        delete_value(&mut arena, &mut root, 50 - i);
        delete_value(&mut arena, &mut root, 50 + i);
    }
    assert_eq!(size(&arena, root), 0);
}

#[test]
fn rb_util_delete_from_middle_outwards_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for i in 0..200 {
        insert_value(&mut arena, &mut root, i);
    }
    for i in 0..100 {
        delete_value(&mut arena, &mut root, 100 + i);
        delete_value(&mut arena, &mut root, 99 - i);
        assert_eq!(size(&arena, root), (198 - 2 * i) as usize);
    }
}

#[test]
fn rb_util_duplicate_insert_matrix() {
    let mut arena = RbArena::new();
    let mut root = None;

    for i in 0..10 {
        insert_value(&mut arena, &mut root, i);
    }
    let dup = arena.allocate(RbNode::new(4, -1)).unwrap();
    let existing = insert(&mut arena, &mut root, dup, &default_less::<i32>).unwrap_err();
    assert_eq!(arena[existing].v, 4);
    assert_eq!(arena.len(), 10);
    assert!(!arena.contains(dup));
}
