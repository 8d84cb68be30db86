//! An ordered Binary Search Tree (BST) whose ordering is supplied by the
//! caller as a three-way comparator.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here "less" and "greater" are whatever the tree's [`Comparator`] says. The
//! default, [`NaturalOrder`], uses the values' [`Ord`] implementation; any
//! closure returning an [`Ordering`][std::cmp::Ordering] works too, as does a
//! function returning a negative, zero, or positive number via [`BySign`].
//!
//! [`Tree`] does no rebalancing, so searching takes `O(height)` where the
//! height can reach `N` for sorted input. Everything except deletion walks
//! the tree with an explicit loop or stack rather than recursion. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree - see [`Order::InOrder`] and
//! [`Tree::iter`].
//!
//! # Examples
//!
//! ```
//! use bstree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&1));
//! assert_eq!(tree.traverse(Order::InOrder), vec![&1, &2, &3]);
//! assert_eq!(tree.traverse_named("Post-order").unwrap(), vec![&1, &3, &2]);
//! assert!(tree.traverse_named("Sideways").is_err());
//!
//! // Deleting a value returns it.
//! assert_eq!(tree.delete(&2), Some(2));
//! assert_eq!(tree.len(), 2);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
mod node;
pub mod traversal;
mod tree;
mod util;


pub use compare::{BySign, Comparator, NaturalOrder};
pub use error::{Error, Result};
pub use node::Node;
pub use traversal::{Iter, Order};
pub use tree::{Event, Tree};
