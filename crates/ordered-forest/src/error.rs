use thiserror::Error;

/// Errors surfaced by the tree containers.
///
/// Duplicate inserts and erasing an absent key are ordinary `bool` outcomes
/// and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node allocator refused a new node.
    #[error("node capacity exceeded (max_size = {max_size})")]
    CapacityExceeded { max_size: usize },
    /// A structural red-black invariant does not hold.
    #[error("red-black invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, TreeError>;
