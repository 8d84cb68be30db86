//! Comparators decide where values go in a [`Tree`][crate::Tree]. Every
//! placement decision (insert, search, delete) goes through one.
//!
//! Three kinds are provided:
//!
//! * [`NaturalOrder`] - the `Ord` implementation of the payload. This is the
//!   default and matches "subtract the second from the first" for integers.
//! * any closure `Fn(&T, &T) -> Ordering`.
//! * [`BySign`] - a function returning a negative, zero, or positive number,
//!   for callers that already have comparisons written that way.
//!
//! # Examples
//!
//! ```
//! use bstree::{BySign, Tree};
//!
//! // Largest first.
//! let mut tree = Tree::with_comparator(BySign(|a: &i64, b: &i64| b - a));
//! tree.extend(vec![1, 3, 2]);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// A three-way comparison imposing a total order on `T`. Implementations must
/// be consistent - the same two inputs always compare the same way - or the
/// tree can no longer find what it stored.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Adapts a function returning a signed number into a [`Comparator`]. A
/// negative result means `a` goes before `b`, zero means they are equal and
/// a positive result means `a` goes after `b`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BySign<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for BySign<F>
where
    F: Fn(&T, &T) -> i64,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}
