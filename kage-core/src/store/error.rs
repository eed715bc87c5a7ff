//! Store errors.
//!
//! Not-found is deliberately not an error: reads and no-op mutations surface
//! `None` and callers decide whether absence matters.

use thiserror::Error;

/// Errors surfaced by mutating store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A post was created or retargeted to reference an author that does
    /// not exist in the store.
    #[error("unknown author id: {id}")]
    UnknownAuthor {
        /// The dangling author id.
        id: String,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
