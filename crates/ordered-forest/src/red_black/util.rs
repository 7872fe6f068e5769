use log::trace;

use crate::arena::Arena;
use crate::error::TreeError;
use crate::util::{first, max_node, min_node, next, set_l, set_p, set_r};

use super::types::RbNode;

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

type RbArena<K, V> = Arena<RbNode<K, V>>;

#[inline]
fn is_black<K, V>(arena: &RbArena<K, V>, i: u32) -> bool {
    arena[i].b
}

/// Absent children count as black.
#[inline]
fn is_black_opt<K, V>(arena: &RbArena<K, V>, i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i].b)
}

#[inline]
fn set_black<K, V>(arena: &mut RbArena<K, V>, i: u32, black: bool) {
    arena[i].b = black;
}

#[inline]
fn swap_colors<K, V>(arena: &mut RbArena<K, V>, a: u32, b: u32) {
    let ab = arena[a].b;
    arena[a].b = arena[b].b;
    arena[b].b = ab;
}

/// Points whichever slot currently holds `old` (a child link of `parent`, or
/// the root slot when `parent` is absent) at `new`.
fn replace_child<K, V>(
    arena: &mut RbArena<K, V>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        Some(p) if arena[p].l == Some(old) => set_l(arena, p, new),
        Some(p) => set_r(arena, p, new),
        None => *root = new,
    }
}

/// Node whose key is equivalent to `key`.
pub fn find<K, V, C>(arena: &RbArena<K, V>, root: Option<u32>, key: &K, less: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> bool,
{
    let mut curr = root;
    while let Some(i) = curr {
        let node = &arena[i];
        curr = if less(&node.k, key) {
            node.r
        } else if less(key, &node.k) {
            node.l
        } else {
            return Some(i);
        };
    }
    None
}

/// Leftmost node whose key is not less than `key`.
pub fn lower_bound<K, V, C>(
    arena: &RbArena<K, V>,
    root: Option<u32>,
    key: &K,
    less: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> bool,
{
    let mut curr = root;
    let mut res = None;
    while let Some(i) = curr {
        let node = &arena[i];
        if less(&node.k, key) {
            curr = node.r;
        } else if less(key, &node.k) {
            res = Some(i);
            curr = node.l;
        } else {
            return Some(i);
        }
    }
    res
}

/// Leftmost node whose key is greater than `key`.
pub fn upper_bound<K, V, C>(
    arena: &RbArena<K, V>,
    root: Option<u32>,
    key: &K,
    less: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> bool,
{
    let mut curr = root;
    let mut res = None;
    while let Some(i) = curr {
        let node = &arena[i];
        if less(key, &node.k) {
            res = Some(i);
            curr = node.l;
        } else {
            curr = node.r;
        }
    }
    res
}

/// Pivots `n` with its right child, which takes `n`'s slot. The two nodes
/// swap colors.
pub fn rotate_left<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>, n: u32) {
    let Some(r) = arena[n].r else {
        return;
    };
    let p = arena[n].p;
    let rl = arena[r].l;

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }

    set_p(arena, r, p);
    replace_child(arena, root, p, n, Some(r));

    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    swap_colors(arena, n, r);
    trace!("rotate_left: {r} replaces {n}");
}

/// Pivots `n` with its left child, which takes `n`'s slot. The two nodes swap
/// colors.
pub fn rotate_right<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>, n: u32) {
    let Some(l) = arena[n].l else {
        return;
    };
    let p = arena[n].p;
    let lr = arena[l].r;

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }

    set_p(arena, l, p);
    replace_child(arena, root, p, n, Some(l));

    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    swap_colors(arena, n, l);
    trace!("rotate_right: {l} replaces {n}");
}

/// Links the already allocated node `n` into the tree and rebalances.
///
/// Returns `Ok(n)` on success. When a node with an equivalent key exists,
/// `n` is deallocated, the tree is left untouched and `Err(existing)` is
/// returned.
pub fn insert<K, V, C>(
    arena: &mut RbArena<K, V>,
    root: &mut Option<u32>,
    n: u32,
    less: &C,
) -> Result<u32, u32>
where
    C: Fn(&K, &K) -> bool,
{
    let Some(mut curr) = *root else {
        set_p(arena, n, None);
        set_black(arena, n, true);
        *root = Some(n);
        return Ok(n);
    };

    loop {
        let go_left = {
            let key = &arena[n].k;
            let curr_key = &arena[curr].k;
            if less(key, curr_key) {
                Some(true)
            } else if less(curr_key, key) {
                Some(false)
            } else {
                None
            }
        };
        let Some(go_left) = go_left else {
            arena.deallocate(n);
            return Err(curr);
        };

        let child = if go_left { arena[curr].l } else { arena[curr].r };
        match child {
            Some(child) => curr = child,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                set_black(arena, n, false);
                insert_fixup(arena, root, n);
                return Ok(n);
            }
        }
    }
}

fn insert_fixup<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>, mut n: u32) {
    loop {
        let Some(p) = arena[n].p else {
            set_black(arena, n, true);
            return;
        };
        if is_black(arena, p) {
            return;
        }
        let Some(g) = arena[p].p else {
            set_black(arena, p, true);
            return;
        };

        let parent_is_left = arena[g].l == Some(p);
        let uncle = if parent_is_left {
            arena[g].r
        } else {
            arena[g].l
        };

        if let Some(u) = uncle.filter(|&u| !is_black(arena, u)) {
            trace!("insert fixup: color flip at {g}");
            set_black(arena, p, true);
            set_black(arena, u, true);
            set_black(arena, g, false);
            n = g;
            continue;
        }

        if parent_is_left {
            if arena[p].r == Some(n) {
                rotate_left(arena, root, p);
            }
            rotate_right(arena, root, g);
        } else {
            if arena[p].l == Some(n) {
                rotate_right(arena, root, p);
            }
            rotate_left(arena, root, g);
        }
        trace!("insert fixup: rotated at {g}");
        return;
    }
}

/// Unlinks `z`, rebalances, frees its slot and returns the node.
///
/// A node with a left subtree is replaced by its predecessor, a node with
/// only a right subtree by its successor; the replacement node itself is
/// spliced into `z`'s position, payloads never move between nodes.
pub fn remove<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>, z: u32) -> RbNode<K, V> {
    let replacement = match (arena[z].l, arena[z].r) {
        (Some(l), _) => Some((max_node(arena, l), true)),
        (None, Some(r)) => Some((min_node(arena, r), false)),
        (None, None) => None,
    };

    match replacement {
        Some((y, from_left)) => {
            trace!("remove {z}: splice replacement {y}");
            let c = if from_left { arena[y].l } else { arena[y].r };
            // `y` lies below `z`, so it always has a parent.
            let yp = arena[y].p.unwrap_or(z);

            let c_is_left = if yp == z {
                if from_left {
                    set_l(arena, z, c);
                } else {
                    set_r(arena, z, c);
                }
                from_left
            } else {
                // A predecessor hangs off its parent's right slot, a successor
                // off the left one.
                if from_left {
                    set_r(arena, yp, c);
                } else {
                    set_l(arena, yp, c);
                }
                !from_left
            };
            if let Some(c) = c {
                set_p(arena, c, Some(yp));
            }

            if is_black(arena, y) {
                remove_fixup(arena, root, c, Some(yp), c_is_left);
            }
            splice(arena, root, z, y);
        }
        None => match arena[z].p {
            None => {
                trace!("remove {z}: last node");
                *root = None;
            }
            Some(p) => {
                trace!("remove {z}: leaf");
                let is_left = arena[p].l == Some(z);
                if is_left {
                    set_l(arena, p, None);
                } else {
                    set_r(arena, p, None);
                }
                if is_black(arena, z) {
                    remove_fixup(arena, root, None, Some(p), is_left);
                }
            }
        },
    }

    arena.deallocate(z)
}

/// Puts the detached node `y` in `z`'s place: parent slot, both children and
/// color.
fn splice<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>, z: u32, y: u32) {
    let zp = arena[z].p;
    let zl = arena[z].l;
    let zr = arena[z].r;

    replace_child(arena, root, zp, z, Some(y));
    set_p(arena, y, zp);

    set_l(arena, y, zl);
    if let Some(zl) = zl {
        set_p(arena, zl, Some(y));
    }
    set_r(arena, y, zr);
    if let Some(zr) = zr {
        set_p(arena, zr, Some(y));
    }

    arena[y].b = arena[z].b;
}

/// Resolves a double-black deficit sitting at `x` (possibly an empty slot)
/// under `parent`, on the side given by `x_is_left`.
fn remove_fixup<K, V>(
    arena: &mut RbArena<K, V>,
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
    mut x_is_left: bool,
) {
    while x != *root && is_black_opt(arena, x) {
        let Some(p) = parent else {
            break;
        };

        let sibling = if x_is_left { arena[p].r } else { arena[p].l };
        let Some(mut w) = sibling else {
            break;
        };

        if !is_black(arena, w) {
            trace!("remove fixup: red sibling {w}");
            if x_is_left {
                rotate_left(arena, root, p);
            } else {
                rotate_right(arena, root, p);
            }
            let sibling = if x_is_left { arena[p].r } else { arena[p].l };
            match sibling {
                Some(s) => w = s,
                None => break,
            }
        }

        let (near, far) = if x_is_left {
            (arena[w].l, arena[w].r)
        } else {
            (arena[w].r, arena[w].l)
        };

        if is_black_opt(arena, near) && is_black_opt(arena, far) {
            trace!("remove fixup: recolor {w}, ascend to {p}");
            set_black(arena, w, false);
            x = Some(p);
            parent = arena[p].p;
            x_is_left = parent.is_some_and(|pp| arena[pp].l == Some(p));
            continue;
        }

        if is_black_opt(arena, far) {
            trace!("remove fixup: straighten at {w}");
            if x_is_left {
                rotate_right(arena, root, w);
            } else {
                rotate_left(arena, root, w);
            }
            let sibling = if x_is_left { arena[p].r } else { arena[p].l };
            match sibling {
                Some(s) => w = s,
                None => break,
            }
        }

        trace!("remove fixup: terminal rotation at {p}");
        if x_is_left {
            rotate_left(arena, root, p);
            if let Some(far) = arena[w].r {
                set_black(arena, far, true);
            }
        } else {
            rotate_right(arena, root, p);
            if let Some(far) = arena[w].l {
                set_black(arena, far, true);
            }
        }
        x = *root;
        break;
    }

    if let Some(x) = x {
        set_black(arena, x, true);
    }
}

/// Frees every node reachable from the root slot and empties it.
pub fn clear<K, V>(arena: &mut RbArena<K, V>, root: &mut Option<u32>) {
    let mut stack: Vec<u32> = root.take().into_iter().collect();
    let mut freed = 0usize;
    while let Some(i) = stack.pop() {
        let node = arena.deallocate(i);
        stack.extend(node.l);
        stack.extend(node.r);
        freed += 1;
    }
    trace!("clear: freed {freed} nodes");
}

/// Checks every structural invariant: black root, no red-red edge, uniform
/// black height, consistent parent links and strictly increasing keys.
pub fn assert_red_black_tree<K, V, C>(
    arena: &RbArena<K, V>,
    root: Option<u32>,
    less: &C,
) -> Result<(), TreeError>
where
    C: Fn(&K, &K) -> bool,
{
    let Some(root) = root else {
        return Ok(());
    };

    let violation = |msg: &str| Err(TreeError::Invariant(msg.to_string()));

    if arena[root].p.is_some() {
        return violation("Root has parent");
    }
    if !arena[root].b {
        return violation("Root is not black");
    }

    fn black_height<K, V>(arena: &RbArena<K, V>, node: Option<u32>) -> Result<usize, TreeError> {
        let Some(node) = node else {
            return Ok(0);
        };
        let invariant = |msg: &str| TreeError::Invariant(format!("{msg} at node {node}"));

        let l = arena[node].l;
        let r = arena[node].r;

        if let Some(li) = l {
            if arena[li].p != Some(node) {
                return Err(invariant("Broken parent link on left child"));
            }
        }
        if let Some(ri) = r {
            if arena[ri].p != Some(node) {
                return Err(invariant("Broken parent link on right child"));
            }
        }

        if !arena[node].b {
            if l.is_some_and(|i| !arena[i].b) {
                return Err(invariant("Red node has red left child"));
            }
            if r.is_some_and(|i| !arena[i].b) {
                return Err(invariant("Red node has red right child"));
            }
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err(invariant("Black height mismatch"));
        }

        Ok(lh + usize::from(arena[node].b))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if !less(&arena[prev].k, &arena[i].k) {
                return violation("Node order violated");
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
