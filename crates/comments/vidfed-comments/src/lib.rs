#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Comment creation and thread reconstruction for the vidfed federation layer.
//!
//! Two pieces: [`CommentWriter`] persists a new comment inside a
//! caller-supplied transactional scope and dispatches exactly one federation
//! delivery, and [`build_tree`] rebuilds a thread hierarchy from the flat,
//! id-ascending batch storage returns.

/// Error types for comment operations.
pub mod error;
/// Federation delivery seam and ownership-based routing.
pub mod federation;
/// Defines the CommentStore trait for pluggable storage backends.
pub mod storage;
/// Pure reconstruction of a thread tree from a flat comment batch.
pub mod tree;
/// Orchestrates comment persistence and federation dispatch.
pub mod writer;

pub use error::CommentError;
pub use federation::{DeliveryRoute, FederationDelivery};
pub use storage::{CommentStore, CreateOptions, InMemoryStore};
pub use tree::{build_tree, CommentTree};
pub use writer::{CommentWriter, CreateComment, SavedComment};
