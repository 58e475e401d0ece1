use super::AvlTree;
use crate::raw::RawAvlTree;

impl<V> AvlTree<V> {
    /// Creates an empty tree with arena capacity for at least `capacity`
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ravl_tree::AvlTree;
    ///
    /// let tree: AvlTree<i32> = AvlTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawAvlTree::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes the arena can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
