//! Red-black tree engine: node type and the structural algorithms over it.

pub mod types;
pub mod util;

pub use types::RbNode;
pub use util::{
    assert_red_black_tree, clear, find, insert, lower_bound, print, remove, rotate_left,
    rotate_right, upper_bound,
};
