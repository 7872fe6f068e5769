//! `std::iter` adapters over the tree, in key order.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::red_black::RbNode;
use crate::util::{next, prev};

/// Borrowing iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<RbNode<K, V>>,
    front: Option<u32>,
    back: Option<u32>,
    len: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        arena: &'a Arena<RbNode<K, V>>,
        front: Option<u32>,
        back: Option<u32>,
        len: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let i = self.front?;
        let arena = self.arena;
        self.front = next(arena, i);
        self.len -= 1;
        let n = &arena[i];
        Some((&n.k, &n.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let i = self.back?;
        let arena = self.arena;
        self.back = prev(arena, i);
        self.len -= 1;
        let n = &arena[i];
        Some((&n.k, &n.v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Keys in order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values in key order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator. The in-order handle sequence is captured up front; nodes
/// are freed one by one as they are yielded and the rest go with the arena
/// on drop.
pub struct IntoIter<K, V> {
    arena: Arena<RbNode<K, V>>,
    order: std::vec::IntoIter<u32>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(arena: Arena<RbNode<K, V>>, order: Vec<u32>) -> Self {
        Self {
            arena,
            order: order.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let i = self.order.next()?;
        Some(self.arena.deallocate(i).into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let i = self.order.next_back()?;
        Some(self.arena.deallocate(i).into_pair())
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
