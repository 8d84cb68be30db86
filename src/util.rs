use crate::node::Node;

/// An owning, possibly empty, link to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// What a recursive delete is looking for.
pub(crate) enum Target<'a, T> {
    /// A node whose payload compares equal to this value. Running out of tree
    /// means the value isn't stored.
    Value(&'a T),
    /// The leftmost node of the subtree, i.e. the in-order successor of the
    /// node whose right subtree this is. Used to unlink the successor while
    /// deleting a node with two children.
    Successor,
}

impl<T> Clone for Target<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Target<'_, T> {}
