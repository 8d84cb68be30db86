//! A mutable, unbalanced Binary Search Tree ordered by a [`Comparator`].
//!
//! Every payload acts as its own key. Inserting a value that compares equal
//! to a stored one is a no-op, so the tree never holds duplicates.
//!
//! # Examples
//!
//! ```
//! use bstree::{Order, Tree};
//!
//! let mut tree = Tree::with_root(5);
//! for x in [3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.traverse(Order::InOrder), vec![&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.find_min(), Some(&1));
//! assert_eq!(tree.find_max(), Some(&9));
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.root().map(|root| *root.data()), Some(7));
//!
//! // Misses are reported as `None`.
//! assert!(tree.search(&100).is_none());
//! assert_eq!(tree.delete(&100), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::Result;
use crate::node::Node;
use crate::traversal::{self, Iter, Order};
use crate::util::{Link, Target};

/// A successful mutation, reported to the tree's observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a, T> {
    /// The value was inserted.
    Inserted(&'a T),
    /// The value was deleted. The tree no longer holds it.
    Deleted(&'a T),
}

type Observer<T> = Box<dyn FnMut(Event<'_, T>) + Send>;

/// A Binary Search Tree without rebalancing. Values are placed by the
/// comparator `C`, which defaults to the values' own [`Ord`] implementation.
pub struct Tree<T, C = NaturalOrder> {
    root: Link<T>,
    compare: C,
    len: usize,
    observer: Option<Observer<T>>,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Generates a new `Tree` holding just `data`.
    pub fn with_root(data: T) -> Self {
        Self::with_root_and_comparator(data, NaturalOrder)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Order, Tree};
    ///
    /// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// tree.insert("ccc");
    /// tree.insert("a");
    /// // Same length as "a" so it counts as a duplicate.
    /// assert!(!tree.insert("b"));
    ///
    /// assert_eq!(tree.traverse(Order::InOrder), vec![&"a", &"ccc"]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
            observer: None,
        }
    }

    /// Generates a new `Tree` ordered by `compare` and holding just `data`.
    pub fn with_root_and_comparator(data: T, compare: C) -> Self {
        Self {
            root: Some(Node::new_boxed(data)),
            compare,
            len: 1,
            observer: None,
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels in the tree: 0 when empty, 1 for just a root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Removes every value. The comparator and observer are kept.
    pub fn clear(&mut self) {
        drop_links(self.root.take());
        self.len = 0;
    }

    /// The node holding the smallest value, if any.
    pub fn find_min_node(&self) -> Option<&Node<T>> {
        self.root().map(Node::min_node)
    }

    /// The node holding the largest value, if any.
    pub fn find_max_node(&self) -> Option<&Node<T>> {
        self.root().map(Node::max_node)
    }

    /// The smallest value, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&T> {
        self.find_min_node().map(Node::data)
    }

    /// The largest value, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        self.find_max_node().map(Node::data)
    }

    /// Collects every value in the given order into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::default()), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Order::InOrder), vec![&1, &2, &3]);
    /// assert_eq!(tree.traverse(Order::PostOrder), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        traversal::collect(self.root(), order)
    }

    /// Like [`traverse`][Self::traverse] but takes the order by name:
    /// `"Pre-order"`, `"In-order"` or `"Post-order"`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTraversal`][crate::Error::UnknownTraversal] for any
    /// other name.
    pub fn traverse_named(&self, order: &str) -> Result<Vec<&T>> {
        Ok(self.traverse(order.parse()?))
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Registers a callback invoked synchronously after every successful
    /// insert or delete. Replaces any previous observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    ///
    /// use bstree::{Event, Tree};
    ///
    /// let events = Arc::new(Mutex::new(Vec::new()));
    /// let mut tree: Tree<i32> = Tree::new();
    /// {
    ///     let events = Arc::clone(&events);
    ///     tree.set_observer(move |event: Event<'_, i32>| {
    ///         events.lock().unwrap().push(format!("{:?}", event))
    ///     });
    /// }
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// tree.delete(&1);
    ///
    /// assert_eq!(*events.lock().unwrap(), vec!["Inserted(1)", "Deleted(1)"]);
    /// ```
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(Event<'_, T>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Removes and returns the observer, if one was set.
    pub fn take_observer(&mut self) -> Option<Box<dyn FnMut(Event<'_, T>) + Send>> {
        self.observer.take()
    }

    fn notify(&mut self, event: Event<'_, T>) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Finds the node holding a value that compares equal to `data`, however
    /// deep it is. Returns `None` if no such node exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&4).map(|node| *node.data()), Some(4));
    /// assert!(tree.search(&100).is_none());
    /// ```
    pub fn search(&self, data: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match self.compare.compare(data, &node.data) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        log::debug!("search reached an empty subtree without a match");
        None
    }

    /// Whether a value comparing equal to `data` is stored.
    pub fn contains(&self, data: &T) -> bool {
        self.search(data).is_some()
    }

    /// Inserts `data` where the comparator places it. Returns `false`, and
    /// drops `data`, if an equal value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, data: T) -> bool {
        let mut current = &mut self.root;
        while let Some(node) = current {
            current = match self.compare.compare(&data, &node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    log::trace!("insert skipped a value that is already stored");
                    return false;
                }
            };
        }

        let inserted = current.insert(Node::new_boxed(data));
        if let Some(observer) = self.observer.as_mut() {
            observer(Event::Inserted(&inserted.data));
        }
        self.len += 1;
        true
    }

    /// Deletes the value comparing equal to `data` and returns it. If no such
    /// value is stored, the tree is left untouched and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::with_root(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(1));
    /// ```
    pub fn delete(&mut self, data: &T) -> Option<T> {
        let Some(removed) = remove(&mut self.root, Target::Value(data), &self.compare) else {
            log::debug!("delete reached an empty subtree without a match");
            return None;
        };
        self.len -= 1;
        self.notify(Event::Deleted(&removed));
        Some(removed)
    }
}

/// Unlinks the node matching `target` from the subtree at `link` and returns
/// its payload.
fn remove<T, C>(link: &mut Link<T>, target: Target<'_, T>, compare: &C) -> Option<T>
where
    C: Comparator<T>,
{
    let node = link.as_mut()?;
    let ordering = match target {
        Target::Value(data) => compare.compare(data, &node.data),
        Target::Successor if node.left.is_some() => Ordering::Less,
        Target::Successor => Ordering::Equal,
    };

    match ordering {
        Ordering::Less => remove(&mut node.left, target, compare),
        Ordering::Greater => remove(&mut node.right, target, compare),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                // The successor has no left child, so this can't come back here.
                let successor = remove(&mut node.right, Target::Successor, compare)?;
                return Some(mem::replace(&mut node.data, successor));
            }
            let Node { data, left, right } = *link.take()?;
            *link = left.or(right);
            Some(data)
        }
    }
}

/// Drops a subtree without recursing, so degenerate trees can't overflow the
/// stack.
fn drop_links<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        drop_links(self.root.take());
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            compare: self.compare.clone(),
            len: self.len,
            observer: None,
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert(data);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
