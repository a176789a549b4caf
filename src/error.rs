//! Error types for the destructive tree operations.
//!
//! Queries that merely fail to find something (`find`, `replace`,
//! `successor`, `predecessor`) signal absence with `Option` instead; the
//! only operation that treats a missing item as a hard failure is
//! [`remove`](crate::linked::Tree::remove).

use thiserror::Error;

/// Errors returned by [`Tree`](crate::linked::Tree) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The item handed to [`remove`](crate::linked::Tree::remove) is not in
    /// the tree. The tree is left unchanged.
    #[error("item not found in tree")]
    NotFound,
}

/// A specialized `Result` for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
