use thiserror::Error;

/// Convenience alias used by the fallible parts of the API.
pub type Result<T> = std::result::Result<T, Error>;

/// Misuse of the tree API. Data conditions such as a missing value or an
/// empty tree are reported as `None`, not as an `Error`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A traversal order was requested by a name that doesn't exist.
    #[error("unknown traversal order `{0}`, expected `Pre-order`, `In-order` or `Post-order`")]
    UnknownTraversal(String),
}
