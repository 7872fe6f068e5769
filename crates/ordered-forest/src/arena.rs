//! Node allocator.
//!
//! A [`Slab`] of node slots addressed by `u32` handles. Handles stay stable
//! for as long as the node is allocated; freed slots are reused by later
//! allocations. `allocate` and `deallocate` are always called in matched
//! pairs by the tree engine.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::error::{Result, TreeError};

/// Largest number of live nodes addressable with `u32` handles.
pub const DEFAULT_MAX_SIZE: usize = u32::MAX as usize;

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Slab<N>,
    max_size: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    /// Arena refusing to hold more than `max_size` live nodes.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            slots: Slab::new(),
            max_size: max_size.min(DEFAULT_MAX_SIZE),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remaining room before `allocate` starts failing.
    pub fn headroom(&self) -> usize {
        self.max_size - self.slots.len()
    }

    pub fn contains(&self, idx: u32) -> bool {
        self.slots.contains(idx as usize)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.min(self.headroom()));
    }

    /// Moves `node` into a fresh slot and returns its handle.
    pub fn allocate(&mut self, node: N) -> Result<u32> {
        if self.slots.len() >= self.max_size {
            return Err(TreeError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        let entry = self.slots.vacant_entry();
        let idx = u32::try_from(entry.key()).map_err(|_| TreeError::CapacityExceeded {
            max_size: self.max_size,
        })?;
        entry.insert(node);
        Ok(idx)
    }

    /// Frees the slot behind `idx` and hands back the node.
    ///
    /// Panics if `idx` is not allocated.
    pub fn deallocate(&mut self, idx: u32) -> N {
        self.slots.remove(idx as usize)
    }

    /// Frees every node at once.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        &self.slots[idx as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        &mut self.slots[idx as usize]
    }
}
