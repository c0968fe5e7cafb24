#![doc = "Error types for comment operations."]

use thiserror::Error;
use vidfed_types::CommentId;

/// Main error type for the vidfed-comments crate.
#[derive(Error, Debug)]
pub enum CommentError {
    /// A reply references a parent that was not seen earlier in the batch.
    /// Under the id-ascending, root-first ordering contract this means
    /// storage (or an upstream collaborator) is inconsistent.
    #[error("Cannot build thread tree, parent {parent} not found for child {child}")]
    ParentNotFound {
        /// The reply whose parent is missing.
        child: CommentId,
        /// The referenced parent identifier.
        parent: CommentId,
    },

    /// A thread batch was empty; a thread always has at least its root.
    #[error("Cannot build thread tree from an empty comment batch")]
    EmptyThread,

    /// A precondition on the inputs was violated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage operation failed; propagated unmodified from the backend.
    #[error("Storage operation failed: {0}")]
    Storage(String),

    /// Federation dispatch failed; propagated unmodified from the collaborator.
    #[error("Federation dispatch failed: {0}")]
    Federation(String),

    /// Passthrough for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Passthrough for collaborator errors without their own variant.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
