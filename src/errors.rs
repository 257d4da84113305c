//! Error Types
//!
//! Fallible scene-graph operations return [`Result<T>`], an alias for
//! `std::result::Result<T, FoldError>`. Contract violations in the animation
//! bookkeeping (zero-frame tweens, barrier overflow) are programming errors
//! and panic instead of returning an error.

use thiserror::Error;

/// The error type for scene-graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// A node handle did not resolve to a live node.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Attaching would make a node its own ancestor.
    #[error("Hierarchy cycle: {child} is an ancestor of {parent}")]
    HierarchyCycle {
        /// Name of the node being attached.
        child: String,
        /// Name of the requested parent.
        parent: String,
    },
}

/// Alias for `Result<T, FoldError>`.
pub type Result<T> = std::result::Result<T, FoldError>;
