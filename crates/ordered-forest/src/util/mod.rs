//! Structural navigation over `p` / `l` / `r` links.
//!
//! None of these functions look at keys: they follow links only, which is
//! what lets cursors walk the tree without a path stack.

use crate::arena::Arena;
use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

/// Leftmost descendant of `idx` (itself when it has no left child).
pub fn min_node<N: Node>(arena: &Arena<N>, mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Rightmost descendant of `idx`.
pub fn max_node<N: Node>(arena: &Arena<N>, mut idx: u32) -> u32 {
    while let Some(r) = get_r(arena, idx) {
        idx = r;
    }
    idx
}

/// Minimum node under `root`.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    root.map(|r| min_node(arena, r))
}

/// Maximum node under `root`.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    root.map(|r| max_node(arena, r))
}

/// In-order successor; `None` past the maximum.
pub fn next<N: Node>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return Some(min_node(arena, r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor; `None` before the minimum.
pub fn prev<N: Node>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return Some(max_node(arena, l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &Arena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}
