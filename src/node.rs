use crate::util::Link;

/// A single element of a [`Tree`][crate::Tree]. A `Node` owns its payload and
/// both of its children; it knows nothing about ordering - the owning tree's
/// comparator decides where each node lives.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self::new(data))
    }

    /// The payload stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, holding values that compare less than
    /// this node's payload.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding values that compare greater
    /// than this node's payload.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node with the smallest payload in the subtree rooted here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 7, 9].into_iter().collect();
    /// let right = tree.root().and_then(|root| root.right()).unwrap();
    ///
    /// assert_eq!(right.min_node().data(), &7);
    /// ```
    pub fn min_node(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The node with the largest payload in the subtree rooted here.
    pub fn max_node(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }
}
