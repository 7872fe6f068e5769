use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{Cursor, CursorMut, IteratorType};
use crate::error::Result;
use crate::iter::{IntoIter, Keys};
use crate::tree::RbTree;
use crate::types::{default_less, Less};

/// Borrowing iterator over set elements, in order.
pub type SetIter<'a, T> = Keys<'a, T, ()>;

/// Sorted set with unique elements, backed by a red-black tree.
pub struct RbSet<T, C = Less<T>>
where
    C: Fn(&T, &T) -> bool,
{
    inner: RbTree<T, (), C>,
}

impl<T: Ord> RbSet<T, Less<T>> {
    pub fn new() -> Self {
        Self::with_comparator(default_less::<T>)
    }
}

impl<T: Ord> Default for RbSet<T, Less<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub fn with_comparator(less: C) -> Self {
        Self {
            inner: RbTree::with_comparator(less),
        }
    }

    pub fn with_max_size(less: C, max_size: usize) -> Self {
        Self {
            inner: RbTree::with_max_size(less, max_size),
        }
    }

    pub fn tree(&self) -> &RbTree<T, (), C> {
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

    /// Inserts `value` if no equivalent element is present.
    ///
    /// # Panics
    ///
    /// Panics when the set is at `max_size`.
    pub fn insert(&mut self, value: T) -> (Cursor<'_, T, ()>, bool) {
        match self.try_insert(value) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_insert(&mut self, value: T) -> Result<(Cursor<'_, T, ()>, bool)> {
        let (idx, inserted) = self.inner.try_insert(value, ())?;
        Ok((
            self.inner.cursor_at(Some(idx), IteratorType::Normal),
            inserted,
        ))
    }

    /// Hinted insert; the hint does not influence the search.
    pub fn insert_hint(&mut self, _hint: Option<u32>, value: T) -> Cursor<'_, T, ()> {
        self.insert(value).0
    }

    /// All-or-nothing bulk insert; returns how many elements were new.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        C: Clone,
    {
        self.inner.try_extend(iter.into_iter().map(|t| (t, ())))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.find(value).is_some()
    }

    pub fn count(&self, value: &T) -> usize {
        usize::from(self.contains(value))
    }

    /// The stored element equivalent to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.inner.find(value).map(|i| self.inner.key(i))
    }

    /// Removes `value`, reporting whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value).is_some()
    }

    /// Removes `value`, returning how many elements went (`0` or `1`).
    pub fn erase(&mut self, value: &T) -> usize {
        usize::from(self.remove(value))
    }

    /// Removes and returns the stored element equivalent to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.inner.remove(value).map(|(t, ())| t)
    }

    /// Removes every element in `[from, to)`.
    pub fn erase_range(&mut self, from: &T, to: &T) -> usize {
        self.inner.remove_range(from, to)
    }

    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|t, _| f(t))
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let i = self.inner.first()?;
        Some(self.inner.remove_node(i).0)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let i = self.inner.last()?;
        Some(self.inner.remove_node(i).0)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(|i| self.inner.key(i))
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(|i| self.inner.key(i))
    }

    pub fn find(&self, value: &T) -> Cursor<'_, T, ()> {
        self.inner
            .cursor_at(self.inner.find(value), IteratorType::Normal)
    }

    /// Cursor that can remove the element at `value`, at end when absent.
    pub fn find_mut(&mut self, value: &T) -> CursorMut<'_, T, ()> {
        let idx = self.inner.find(value);
        self.inner.cursor_mut_at(idx, IteratorType::Normal)
    }

    pub fn lower_bound(&self, value: &T) -> Cursor<'_, T, ()> {
        self.inner
            .cursor_at(self.inner.lower_bound(value), IteratorType::Normal)
    }

    pub fn upper_bound(&self, value: &T) -> Cursor<'_, T, ()> {
        self.inner
            .cursor_at(self.inner.upper_bound(value), IteratorType::Normal)
    }

    pub fn equal_range(&self, value: &T) -> (Cursor<'_, T, ()>, Cursor<'_, T, ()>) {
        (self.lower_bound(value), self.upper_bound(value))
    }

    pub fn begin(&self) -> Cursor<'_, T, ()> {
        self.inner.cursor_at(self.inner.first(), IteratorType::Normal)
    }

    pub fn end(&self) -> Cursor<'_, T, ()> {
        self.inner.cursor_at(None, IteratorType::Normal)
    }

    pub fn rbegin(&self) -> Cursor<'_, T, ()> {
        self.inner.cursor_at(self.inner.last(), IteratorType::Reverse)
    }

    pub fn rend(&self) -> Cursor<'_, T, ()> {
        self.inner.cursor_at(None, IteratorType::Reverse)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T, ()> {
        let first = self.inner.first();
        self.inner.cursor_mut_at(first, IteratorType::Normal)
    }

    pub fn iter(&self) -> SetIter<'_, T> {
        Keys {
            inner: self.inner.iter(),
        }
    }

    pub fn assert_valid(&self) -> Result<()> {
        self.inner.assert_valid()
    }
}

impl<T: fmt::Debug, C> RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub fn print(&self) -> String {
        self.inner.print()
    }
}

impl<T: Clone, C> Clone for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for RbSet<T, C> where C: Fn(&T, &T) -> bool {}

impl<T: PartialOrd, C> PartialOrd for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, C> Ord for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, C> Extend<T> for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbSet<T, Less<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for RbSet<T, Less<T>> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> SetIter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over set elements.
pub struct SetIntoIter<T> {
    inner: IntoIter<T, ()>,
}

impl<T> Iterator for SetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(t, ())| t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SetIntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(t, ())| t)
    }
}

impl<T> ExactSizeIterator for SetIntoIter<T> {}

impl<T, C> IntoIterator for RbSet<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    fn into_iter(self) -> SetIntoIter<T> {
        SetIntoIter {
            inner: self.inner.into_iter(),
        }
    }
}
