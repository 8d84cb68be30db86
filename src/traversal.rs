//! Orders in which a tree's payloads can be visited.
//!
//! [`Tree::traverse`][crate::Tree::traverse] materializes a fresh `Vec` for
//! every call while [`Iter`] walks the tree lazily in sorted order. Both keep
//! their working stack to themselves, so independent traversals never see
//! each other's state.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::node::Node;

/// When a node's own payload is visited relative to its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    #[default]
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields payloads sorted by
    /// the tree's comparator.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl Order {
    /// The textual name of this order, e.g. `"In-order"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::PreOrder => "Pre-order",
            Self::InOrder => "In-order",
            Self::PostOrder => "Post-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    /// Parses `"Pre-order"`, `"In-order"` or `"Post-order"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Order};
    ///
    /// assert_eq!("In-order".parse(), Ok(Order::InOrder));
    /// assert_eq!(
    ///     "Level-order".parse::<Order>(),
    ///     Err(Error::UnknownTraversal("Level-order".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pre-order" => Ok(Self::PreOrder),
            "In-order" => Ok(Self::InOrder),
            "Post-order" => Ok(Self::PostOrder),
            other => Err(Error::UnknownTraversal(other.to_string())),
        }
    }
}

/// Collects the payloads of the subtree rooted at `root` in the given order.
pub(crate) fn collect<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    let mut out = Vec::new();
    let Some(root) = root else {
        return out;
    };

    match order {
        Order::PreOrder => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                out.push(&node.data);
                // Right first so that the left subtree is popped first.
                stack.extend(node.right());
                stack.extend(node.left());
            }
        }
        Order::InOrder => {
            let mut stack = Vec::new();
            let mut current = Some(root);
            loop {
                while let Some(node) = current {
                    stack.push(node);
                    current = node.left();
                }
                let Some(node) = stack.pop() else {
                    break;
                };
                out.push(&node.data);
                current = node.right();
            }
        }
        Order::PostOrder => {
            // Node, right, left reversed is left, right, node.
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                out.push(&node.data);
                stack.extend(node.left());
                stack.extend(node.right());
            }
            out.reverse();
        }
    }

    out
}

/// A lazy in-order iterator over the payloads of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtrees have been pushed but which haven't been
    /// yielded yet. The top of the stack is the next node to yield.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// `len` is the number of nodes under `root`.
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
