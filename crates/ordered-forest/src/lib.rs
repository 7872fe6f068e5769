//! Arena-backed red-black trees with sentinel-rooted cursors.
//!
//! Nodes live in a slab [`Arena`] and link to each other through
//! `Option<u32>` handles (`p` / `l` / `r`). Each tree owns a [`Sentinel`]
//! whose parent link is the real root, so structural code rewrites the root
//! through the same slot it uses for any other child link.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Less`] comparator, [`default_less`] |
//! [`arena`] | Slab node allocator with a `max_size` cap |
//! [`util`] | `first`, `last`, `next`, `prev`, `size` over any [`Node`] |
//! [`red_black`] | [`RbNode`], rotations, insert / remove with fixups, checker |
//! [`tree`] | [`RbTree`]: sentinel + arena + comparator |
//! [`cursor`] | [`Cursor`], [`CursorMut`], [`IteratorType`] |
//! [`iter`] | `Iterator` adapters |
//! [`map`] / [`set`] | [`RbMap`] and [`RbSet`] containers |
//! [`fuzzer`] | Seeded operation traces for randomized tests |

pub mod arena;
pub mod cursor;
pub mod error;
pub mod fuzzer;
pub mod iter;
pub mod map;
pub mod red_black;
pub mod set;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use cursor::{Cursor, CursorMut, IteratorType};
pub use error::{Result, TreeError};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::RbMap;
pub use red_black::RbNode;
pub use set::{RbSet, SetIntoIter, SetIter};
pub use tree::{RbTree, Sentinel};
pub use types::{default_less, equivalent, Less, Node};
pub use util::{first, last, next, prev};
