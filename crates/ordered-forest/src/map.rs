use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use crate::cursor::{Cursor, CursorMut, IteratorType};
use crate::error::Result;
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::tree::RbTree;
use crate::types::{default_less, Less};

/// Sorted map with unique keys, backed by a red-black tree.
///
/// Keys are ordered by a strict-weak-order "less" predicate; two keys are the
/// same key when neither is less than the other.
pub struct RbMap<K, V, C = Less<K>>
where
    C: Fn(&K, &K) -> bool,
{
    inner: RbTree<K, V, C>,
}

impl<K: Ord, V> RbMap<K, V, Less<K>> {
    pub fn new() -> Self {
        Self::with_comparator(default_less::<K>)
    }
}

impl<K: Ord, V> Default for RbMap<K, V, Less<K>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    pub fn with_comparator(less: C) -> Self {
        Self {
            inner: RbTree::with_comparator(less),
        }
    }

    /// Map that refuses to grow past `max_size` entries.
    pub fn with_max_size(less: C, max_size: usize) -> Self {
        Self {
            inner: RbTree::with_max_size(less, max_size),
        }
    }

    pub fn tree(&self) -> &RbTree<K, V, C> {
        &self.inner
    }

    pub fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.inner.max_size()
    }

    fn insert_index(&mut self, key: K, value: V) -> (u32, bool) {
        match self.inner.try_insert(key, value) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `(key, value)` if the key is absent.
    ///
    /// Returns a cursor at the entry holding the key and whether the entry
    /// is new. An existing entry is left as is and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics when the map is at `max_size`; see [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<'_, K, V>, bool) {
        let (idx, inserted) = self.insert_index(key, value);
        (
            self.inner.cursor_mut_at(Some(idx), IteratorType::Normal),
            inserted,
        )
    }

    pub fn try_insert(&mut self, key: K, value: V) -> Result<(CursorMut<'_, K, V>, bool)> {
        let (idx, inserted) = self.inner.try_insert(key, value)?;
        Ok((
            self.inner.cursor_mut_at(Some(idx), IteratorType::Normal),
            inserted,
        ))
    }

    /// Hinted insert. The hint is accepted for API compatibility and does not
    /// influence where the search starts.
    pub fn insert_hint(&mut self, _hint: Option<u32>, key: K, value: V) -> CursorMut<'_, K, V> {
        self.insert(key, value).0
    }

    /// All-or-nothing bulk insert; see [`RbTree::try_extend`].
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        C: Clone,
    {
        self.inner.try_extend(iter)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.find(key).map(|i| self.inner.value(i))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.inner.find(key)?;
        Some(self.inner.value_mut(i))
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.inner
            .find(key)
            .map(|i| (self.inner.key(i), self.inner.value(i)))
    }

    /// Value for `key`, inserting `f()` first when the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = match self.inner.find(&key) {
            Some(i) => i,
            None => self.insert_index(key, f()).0,
        };
        self.inner.value_mut(idx)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.find(key).is_some()
    }

    /// `1` when the key is present, else `0`.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.inner.remove(key)
    }

    /// Removes `key`, reporting whether it was present.
    pub fn erase(&mut self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    /// Removes every key in `[from, to)`.
    pub fn erase_range(&mut self, from: &K, to: &K) -> usize {
        self.inner.remove_range(from, to)
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.inner.retain(f)
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let i = self.inner.first()?;
        Some(self.inner.remove_node(i))
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let i = self.inner.last()?;
        Some(self.inner.remove_node(i))
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.inner
            .first()
            .map(|i| (self.inner.key(i), self.inner.value(i)))
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.inner
            .last()
            .map(|i| (self.inner.key(i), self.inner.value(i)))
    }

    /// Cursor at `key`, or at end when absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K, V> {
        self.inner
            .cursor_at(self.inner.find(key), IteratorType::Normal)
    }

    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V> {
        let idx = self.inner.find(key);
        self.inner.cursor_mut_at(idx, IteratorType::Normal)
    }

    /// Cursor at the first key not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V> {
        self.inner
            .cursor_at(self.inner.lower_bound(key), IteratorType::Normal)
    }

    /// Cursor at the first key greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, V> {
        self.inner
            .cursor_at(self.inner.upper_bound(key), IteratorType::Normal)
    }

    pub fn equal_range(&self, key: &K) -> (Cursor<'_, K, V>, Cursor<'_, K, V>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    pub fn begin(&self) -> Cursor<'_, K, V> {
        self.inner.cursor_at(self.inner.first(), IteratorType::Normal)
    }

    pub fn end(&self) -> Cursor<'_, K, V> {
        self.inner.cursor_at(None, IteratorType::Normal)
    }

    pub fn rbegin(&self) -> Cursor<'_, K, V> {
        self.inner.cursor_at(self.inner.last(), IteratorType::Reverse)
    }

    pub fn rend(&self) -> Cursor<'_, K, V> {
        self.inner.cursor_at(None, IteratorType::Reverse)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, K, V> {
        let first = self.inner.first();
        self.inner.cursor_mut_at(first, IteratorType::Normal)
    }

    pub fn rbegin_mut(&mut self) -> CursorMut<'_, K, V> {
        let last = self.inner.last();
        self.inner.cursor_mut_at(last, IteratorType::Reverse)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Calls `f` on every entry in key order with mutable access to values.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V),
    {
        self.inner.retain(|k, v| {
            f(k, v);
            true
        })
    }

    pub fn assert_valid(&self) -> Result<()> {
        self.inner.assert_valid()
    }
}

impl<K, V, C> RbMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> bool,
{
    /// Debug rendering of the tree shape and colors.
    pub fn print(&self) -> String {
        self.inner.print()
    }
}

impl<K, V, C> Clone for RbMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RbMap<K, V, C> where C: Fn(&K, &K) -> bool {}

impl<K: PartialOrd, V: PartialOrd, C> PartialOrd for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, C> Ord for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K, V, C> Index<&K> for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, C> Extend<(K, V)> for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert_index(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbMap<K, V, Less<K>> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RbMap<K, V, Less<K>> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> bool,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        self.inner.into_iter()
    }
}
