use thiserror::Error;

/// The failure conditions of the tree and list operations.
///
/// All of these are expected, local conditions: a failed call is a
/// strict no-op on the structure. Inputs are validated before any
/// mutation begins, so there is no partially-applied state to observe.
///
/// # Examples
///
/// ```
/// use ravl_tree::{AvlTree, TreeError};
///
/// let mut tree = AvlTree::new();
/// tree.insert(1, "a").unwrap();
///
/// assert_eq!(tree.insert(1, "b"), Err(TreeError::DuplicateKey(1)));
/// assert_eq!(tree.delete(2), Err(TreeError::NotFound(2)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// An insert found its key already present.
    #[error("key {0} is already present")]
    DuplicateKey(i64),

    /// A key-addressed operation found no node with that key.
    #[error("key {0} is not present")]
    NotFound(i64),

    /// A rank or index fell outside the valid bounds. `index` carries
    /// the offending input verbatim: a 0-based index for positional
    /// operations, a 1-based rank for `select`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The rank or index as passed by the caller.
        index: usize,
        /// The element count at the time of the call.
        len: usize,
    },
}
