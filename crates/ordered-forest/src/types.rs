//! Node link trait and comparator definitions.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to each other by
//! `Option<u32>` handles. All tree-manipulation functions take the arena and
//! work with handles, so rotations and splices never move node payloads.

/// Tree links (`p`, `l`, `r`).
///
/// `p` is a back-reference only; the subtree hanging off `l` / `r` is what a
/// node owns.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Strict-weak-order "less than" predicate used by the containers.
pub type Less<K> = fn(&K, &K) -> bool;

/// Default comparator: natural `Ord` ordering.
pub fn default_less<K: Ord>(a: &K, b: &K) -> bool {
    a < b
}

/// Two keys are equivalent when neither orders before the other.
#[inline]
pub fn equivalent<K, C>(less: &C, a: &K, b: &K) -> bool
where
    C: Fn(&K, &K) -> bool,
{
    !less(a, b) && !less(b, a)
}
