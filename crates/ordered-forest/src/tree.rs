//! Container core shared by [`RbMap`](crate::RbMap) and [`RbSet`](crate::RbSet).
//!
//! An [`RbTree`] owns one [`Sentinel`] and one node [`Arena`]. Every
//! structural mutation goes through the engine in [`crate::red_black`] with
//! the sentinel's root slot, so a rotation that changes the root simply
//! writes through that slot.

use log::debug;

use crate::arena::Arena;
use crate::cursor::{Cursor, CursorMut, IteratorType};
use crate::error::Result;
use crate::iter::{IntoIter, Iter};
use crate::red_black::{self, RbNode};
use crate::types::{default_less, Less};
use crate::util::{first, last, next, prev};

/// Permanent header of a tree. Its `p` link holds the real root (absent when
/// the tree is empty); it never carries a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sentinel {
    p: Option<u32>,
}

impl Sentinel {
    pub fn root(&self) -> Option<u32> {
        self.p
    }

    pub(crate) fn slot(&mut self) -> &mut Option<u32> {
        &mut self.p
    }
}

pub struct RbTree<K, V, C = Less<K>>
where
    C: Fn(&K, &K) -> bool,
{
    sentinel: Sentinel,
    arena: Arena<RbNode<K, V>>,
    less: C,
}

impl<K: Ord, V> RbTree<K, V, Less<K>> {
    pub fn new() -> Self {
        Self::with_comparator(default_less::<K>)
    }
}

impl<K: Ord, V> Default for RbTree<K, V, Less<K>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Clone for RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> bool + Clone,
{
    fn clone(&self) -> Self {
        // Slot handles are preserved by the arena clone, so the links stay valid.
        Self {
            sentinel: self.sentinel,
            arena: self.arena.clone(),
            less: self.less.clone(),
        }
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    pub fn with_comparator(less: C) -> Self {
        Self {
            sentinel: Sentinel::default(),
            arena: Arena::new(),
            less,
        }
    }

    /// Tree whose allocator refuses to hold more than `max_size` nodes.
    pub fn with_max_size(less: C, max_size: usize) -> Self {
        Self {
            sentinel: Sentinel::default(),
            arena: Arena::with_max_size(max_size),
            less,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.sentinel.root()
    }

    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    pub fn arena(&self) -> &Arena<RbNode<K, V>> {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.less
    }

    /// Every allocated node is linked into the tree, so the arena population
    /// is the element count.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentinel.root().is_none()
    }

    pub fn max_size(&self) -> usize {
        self.arena.max_size()
    }

    pub fn node(&self, idx: u32) -> &RbNode<K, V> {
        &self.arena[idx]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx].k
    }

    pub fn value(&self, idx: u32) -> &V {
        &self.arena[idx].v
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        &mut self.arena[idx].v
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.sentinel.root())
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.sentinel.root())
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        red_black::find(&self.arena, self.sentinel.root(), key, &self.less)
    }

    pub fn lower_bound(&self, key: &K) -> Option<u32> {
        red_black::lower_bound(&self.arena, self.sentinel.root(), key, &self.less)
    }

    pub fn upper_bound(&self, key: &K) -> Option<u32> {
        red_black::upper_bound(&self.arena, self.sentinel.root(), key, &self.less)
    }

    /// Inserts `(key, value)` unless an equivalent key is present.
    ///
    /// Returns the handle of the node holding the key and whether it was
    /// newly inserted. On a duplicate the candidate is dropped and the tree is
    /// unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(u32, bool)> {
        if self.arena.headroom() == 0 {
            // A full arena must still report duplicates as plain `false`.
            if let Some(existing) = self.find(&key) {
                return Ok((existing, false));
            }
        }
        let n = self.arena.allocate(RbNode::new(key, value))?;
        match red_black::insert(&mut self.arena, self.sentinel.slot(), n, &self.less) {
            Ok(n) => Ok((n, true)),
            Err(existing) => Ok((existing, false)),
        }
    }

    /// Unlinks and frees node `idx`, returning its key and value.
    pub fn remove_node(&mut self, idx: u32) -> (K, V) {
        red_black::remove(&mut self.arena, self.sentinel.slot(), idx).into_pair()
    }

    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.find(key)?;
        Some(self.remove_node(idx))
    }

    /// Removes every key in `[from, to)` and returns how many went.
    pub fn remove_range(&mut self, from: &K, to: &K) -> usize {
        if (self.less)(to, from) {
            return 0;
        }
        let stop = self.lower_bound(to);
        let mut curr = self.lower_bound(from);
        let mut removed = 0;
        while let Some(i) = curr {
            if Some(i) == stop {
                break;
            }
            curr = self.next(i);
            self.remove_node(i);
            removed += 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        red_black::clear(&mut self.arena, self.sentinel.slot());
    }

    /// Keeps only the entries for which `f` returns `true`, visiting them in
    /// key order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut curr = self.first();
        while let Some(i) = curr {
            // Splicing never moves payloads, so the successor handle survives
            // the removal of `i`.
            curr = self.next(i);
            let node = &mut self.arena[i];
            if !f(&node.k, &mut node.v) {
                self.remove_node(i);
            }
        }
    }

    /// Inserts every entry of `iter` or none of them.
    ///
    /// New entries are staged in a scratch tree first; if staging runs out of
    /// capacity the scratch tree is dropped and `self` is untouched. Keys
    /// already present (in `self` or earlier in `iter`) are skipped. Returns
    /// the number of inserted entries.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        C: Clone,
    {
        let mut staging = RbTree::with_max_size(self.less.clone(), self.arena.headroom());
        for (k, v) in iter {
            if self.find(&k).is_some() {
                continue;
            }
            if let Err(err) = staging.try_insert(k, v) {
                debug!(
                    "bulk insert rolled back with {} staged entries: {err}",
                    staging.len()
                );
                return Err(err);
            }
        }

        let staged = staging.len();
        self.arena.reserve(staged);
        for (k, v) in staging {
            self.try_insert(k, v)?;
        }
        debug!("bulk insert committed {staged} entries");
        Ok(staged)
    }

    pub fn cursor_at(&self, node: Option<u32>, iterator_type: IteratorType) -> Cursor<'_, K, V> {
        Cursor::new(&self.arena, &self.sentinel, node, iterator_type)
    }

    pub fn cursor_mut_at(
        &mut self,
        node: Option<u32>,
        iterator_type: IteratorType,
    ) -> CursorMut<'_, K, V> {
        CursorMut::new(&mut self.arena, &mut self.sentinel, node, iterator_type)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.first(), self.last(), self.len())
    }

    /// Debug rendering of the whole tree.
    pub fn print(&self) -> String
    where
        K: std::fmt::Debug,
        V: std::fmt::Debug,
    {
        red_black::print(&self.arena, self.sentinel.root(), "")
    }

    /// Runs the invariant checker and cross-checks the element count.
    pub fn assert_valid(&self) -> Result<()> {
        red_black::assert_red_black_tree(&self.arena, self.sentinel.root(), &self.less)?;
        let reachable = crate::util::size(&self.arena, self.sentinel.root());
        if reachable != self.len() {
            return Err(crate::error::TreeError::Invariant(format!(
                "{reachable} reachable nodes, {} allocated",
                self.len()
            )));
        }
        Ok(())
    }
}

impl<K, V, C> IntoIterator for RbTree<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let mut order = Vec::with_capacity(self.len());
        let mut curr = self.first();
        while let Some(i) = curr {
            order.push(i);
            curr = self.next(i);
        }
        IntoIter::new(self.arena, order)
    }
}
