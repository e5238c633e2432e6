//! Error types for Cognitive Frameworks

use thiserror::Error;

/// Errors raised while building a registry or selecting a collection.
///
/// All of these are startup failures: once a [`crate::Registry`] exists,
/// every operation on it is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A record has an empty (or whitespace-only) id
    #[error("Record at position {position} has an empty id")]
    EmptyId { position: usize },

    /// Two records share the same id
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// A record has an empty title
    #[error("Record has an empty title: {0}")]
    EmptyTitle(String),

    /// Content produced no non-empty step
    #[error("Record has no steps: {0}")]
    NoSteps(String),

    /// Content contains an empty step (consecutive, leading or trailing delimiters)
    #[error("Record {id} has an empty step at index {index}")]
    EmptyStep { id: String, index: usize },

    /// No built-in collection with this name
    #[error("Unknown collection: {0} (expected one of: frameworks, principles)")]
    UnknownCollection(String),
}

/// Result type alias using RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;
