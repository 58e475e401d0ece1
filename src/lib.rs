//! Rank-augmented AVL tree collections for Rust.
//!
//! This crate provides [`AvlTree`], a self-balancing binary search tree
//! over distinct `i64` keys augmented with subtree sizes, and
//! [`TreeList`], a list facade with O(log n) retrieve/insert/delete at
//! any position built on the same structure:
//!
//! - [`search`](AvlTree::search) / [`insert`](AvlTree::insert) /
//!   [`delete`](AvlTree::delete) - dictionary access by key
//! - [`select`](AvlTree::select) - the element at a given in-order rank
//! - [`insert_at`](AvlTree::insert_at) / [`delete_at`](AvlTree::delete_at) -
//!   positional mutation by 0-based index
//!
//! # Example
//!
//! ```
//! use ravl_tree::{AvlTree, TreeList};
//!
//! let mut scores = AvlTree::new();
//! scores.insert(85, "Bob").unwrap();
//! scores.insert(100, "Alice").unwrap();
//! scores.insert(92, "Carol").unwrap();
//!
//! // Dictionary access (O(log n))
//! assert_eq!(scores.search(92), Some(&"Carol"));
//!
//! // Order statistics: the median score holder (rank 2 of 3)
//! assert_eq!(scores.select(2), Ok((92, &"Carol")));
//!
//! // A list with logarithmic editing anywhere
//! let mut list = TreeList::new();
//! list.insert(0, 1, "world").unwrap();
//! list.insert(0, 2, "hello").unwrap();
//! assert_eq!(list[0], "hello");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard
//!   library dependency
//! - **O(log n) rank operations** - Select and positional mutation via
//!   subtree size augmentation
//! - **Observable rebalancing** - Key inserts and deletes report their
//!   rotation counts
//! - **Cycle-free ownership** - Nodes live in an arena and refer to
//!   children and parents by index, so the parent back-references never
//!   form an ownership cycle
//!
//! # Implementation
//!
//! The tree keeps the classic AVL balance invariant: at every node the
//! child heights differ by at most one, which bounds the height at
//! O(log n). Each node additionally caches the size of its subtree.
//! Every mutation performs a plain structural edit and then hands the
//! edit point to one shared bottom-up walk that refreshes height and
//! size at each ancestor and applies single or double rotations where
//! the balance factor reaches ±2.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod error;
mod raw;

pub mod avl_tree;
pub mod tree_list;

pub use avl_tree::AvlTree;
pub use error::TreeError;
pub use tree_list::TreeList;
