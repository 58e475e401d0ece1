use super::AvlTree;
use crate::TreeError;

impl<V> AvlTree<V> {
    /// Returns the key-value pair at 1-based in-order position `rank`.
    ///
    /// Ranks run `1..=len()`. Fails with [`TreeError::OutOfRange`] for
    /// rank 0 or anything past the end, including every rank on an
    /// empty tree.
    ///
    /// # Complexity
    ///
    /// O(log n): a single descent guided by subtree sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ravl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(30, "c").unwrap();
    /// tree.insert(10, "a").unwrap();
    /// tree.insert(20, "b").unwrap();
    ///
    /// assert_eq!(tree.select(1), Ok((10, &"a")));
    /// assert_eq!(tree.select(3), Ok((30, &"c")));
    /// assert!(tree.select(0).is_err());
    /// assert!(tree.select(4).is_err());
    /// ```
    pub fn select(&self, rank: usize) -> Result<(i64, &V), TreeError> {
        self.raw.select(rank)
    }

    /// Inserts `value` (tagged with `key`) at 0-based in-order position
    /// `index`, shifting later positions up by one.
    ///
    /// Valid indices are `0..=len()`; `len()` appends. Fails with
    /// [`TreeError::OutOfRange`] otherwise. The key is an opaque tag
    /// here, not a sort key: this call places the node purely by
    /// position and abandons the key-order invariant (see the
    /// [type-level notes](AvlTree#mixing-access-modes)).
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ravl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert_at(0, 100, "a").unwrap();
    /// tree.insert_at(0, 200, "b").unwrap();
    ///
    /// assert_eq!(tree.select(1), Ok((200, &"b")));
    /// assert_eq!(tree.select(2), Ok((100, &"a")));
    /// ```
    pub fn insert_at(&mut self, index: usize, key: i64, value: V) -> Result<(), TreeError> {
        self.raw.insert_at(index, key, value)
    }

    /// Removes the node at 0-based in-order position `index`, shifting
    /// later positions down by one.
    ///
    /// Valid indices are `0..len()`. Fails with
    /// [`TreeError::OutOfRange`] otherwise.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete_at(&mut self, index: usize) -> Result<(), TreeError> {
        self.raw.delete_at(index).map(drop)
    }
}
