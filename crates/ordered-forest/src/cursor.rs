//! Bidirectional cursors.
//!
//! A cursor is a `(sentinel, node)` pair: `node == None` is the end
//! position. Stepping follows `p` / `l` / `r` links only, no path stack is
//! kept. Decrementing end lands on the maximum, incrementing end stays at end,
//! decrementing the minimum yields end.

use std::fmt;

use crate::arena::Arena;
use crate::red_black::{self, RbNode};
use crate::tree::Sentinel;
use crate::util::{first, last, next, prev};

/// Direction a cursor walks in when incremented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IteratorType {
    #[default]
    Normal,
    Reverse,
}

fn step_forward<K, V>(
    arena: &Arena<RbNode<K, V>>,
    node: Option<u32>,
    iterator_type: IteratorType,
) -> Option<u32> {
    let i = node?;
    match iterator_type {
        IteratorType::Normal => next(arena, i),
        IteratorType::Reverse => prev(arena, i),
    }
}

fn step_back<K, V>(
    arena: &Arena<RbNode<K, V>>,
    root: Option<u32>,
    node: Option<u32>,
    iterator_type: IteratorType,
) -> Option<u32> {
    match (node, iterator_type) {
        (None, IteratorType::Normal) => last(arena, root),
        (None, IteratorType::Reverse) => first(arena, root),
        (Some(i), IteratorType::Normal) => prev(arena, i),
        (Some(i), IteratorType::Reverse) => next(arena, i),
    }
}

/// Read-only cursor.
pub struct Cursor<'a, K, V> {
    arena: &'a Arena<RbNode<K, V>>,
    sentinel: &'a Sentinel,
    node: Option<u32>,
    iterator_type: IteratorType,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node)
            .field("entry", &self.get())
            .field("iterator_type", &self.iterator_type)
            .finish()
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(
        arena: &'a Arena<RbNode<K, V>>,
        sentinel: &'a Sentinel,
        node: Option<u32>,
        iterator_type: IteratorType,
    ) -> Self {
        Self {
            arena,
            sentinel,
            node,
            iterator_type,
        }
    }

    /// Node handle under the cursor, `None` at end.
    pub fn index(&self) -> Option<u32> {
        self.node
    }

    pub fn iterator_type(&self) -> IteratorType {
        self.iterator_type
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub fn key(&self) -> Option<&'a K> {
        let arena = self.arena;
        self.node.map(move |i| &arena[i].k)
    }

    pub fn value(&self) -> Option<&'a V> {
        let arena = self.arena;
        self.node.map(move |i| &arena[i].v)
    }

    /// Entry under the cursor; `None` at end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        self.node.map(move |i| {
            let n = &arena[i];
            (&n.k, &n.v)
        })
    }

    pub fn move_next(&mut self) {
        self.node = step_forward(self.arena, self.node, self.iterator_type);
    }

    pub fn move_prev(&mut self) {
        self.node = step_back(
            self.arena,
            self.sentinel.root(),
            self.node,
            self.iterator_type,
        );
    }

    /// Copy of the cursor advanced by one step.
    pub fn peek_next(&self) -> Self {
        let mut c = *self;
        c.move_next();
        c
    }

    pub fn peek_prev(&self) -> Self {
        let mut c = *self;
        c.move_prev();
        c
    }

    /// Same position, walking the other way.
    pub fn reversed(&self) -> Self {
        let iterator_type = match self.iterator_type {
            IteratorType::Normal => IteratorType::Reverse,
            IteratorType::Reverse => IteratorType::Normal,
        };
        Self {
            iterator_type,
            ..*self
        }
    }
}

/// Cursor with mutable access to values and the ability to remove the entry
/// under it.
pub struct CursorMut<'a, K, V> {
    arena: &'a mut Arena<RbNode<K, V>>,
    sentinel: &'a mut Sentinel,
    node: Option<u32>,
    iterator_type: IteratorType,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("node", &self.node)
            .field("entry", &self.get())
            .field("iterator_type", &self.iterator_type)
            .finish()
    }
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(crate) fn new(
        arena: &'a mut Arena<RbNode<K, V>>,
        sentinel: &'a mut Sentinel,
        node: Option<u32>,
        iterator_type: IteratorType,
    ) -> Self {
        Self {
            arena,
            sentinel,
            node,
            iterator_type,
        }
    }

    pub fn index(&self) -> Option<u32> {
        self.node
    }

    pub fn iterator_type(&self) -> IteratorType {
        self.iterator_type
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub fn key(&self) -> Option<&K> {
        self.node.map(|i| &self.arena[i].k)
    }

    pub fn value(&self) -> Option<&V> {
        self.node.map(|i| &self.arena[i].v)
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        let i = self.node?;
        Some(&mut self.arena[i].v)
    }

    pub fn get(&self) -> Option<(&K, &V)> {
        self.node.map(|i| {
            let n = &self.arena[i];
            (&n.k, &n.v)
        })
    }

    pub fn get_mut(&mut self) -> Option<(&K, &mut V)> {
        let i = self.node?;
        let n = &mut self.arena[i];
        Some((&n.k, &mut n.v))
    }

    /// Consumes the cursor, keeping the borrow of the value for `'a`.
    pub fn into_value_mut(self) -> Option<&'a mut V> {
        let i = self.node?;
        let arena = self.arena;
        Some(&mut arena[i].v)
    }

    pub fn move_next(&mut self) {
        self.node = step_forward(self.arena, self.node, self.iterator_type);
    }

    pub fn move_prev(&mut self) {
        self.node = step_back(
            self.arena,
            self.sentinel.root(),
            self.node,
            self.iterator_type,
        );
    }

    /// Read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.arena, self.sentinel, self.node, self.iterator_type)
    }

    /// Removes the entry under the cursor and moves on to the following one
    /// in the cursor's direction. Returns `None` (and does nothing) at end.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let i = self.node?;
        let following = step_forward(self.arena, Some(i), self.iterator_type);
        let removed = red_black::remove(self.arena, self.sentinel.slot(), i);
        self.node = following;
        Some(removed.into_pair())
    }
}

impl<'a, K, V> From<CursorMut<'a, K, V>> for Cursor<'a, K, V> {
    fn from(c: CursorMut<'a, K, V>) -> Self {
        Cursor::new(c.arena, c.sentinel, c.node, c.iterator_type)
    }
}
