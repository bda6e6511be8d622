//! Error types for versification loading and conversion.

use thiserror::Error;
use versiref_types::{BookId, UnknownBookCode};

/// Result type alias for versiref-versification operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading versification data or converting
/// references between systems.
#[derive(Debug, Error)]
pub enum Error {
    /// Versification JSON could not be deserialized.
    #[error("failed to parse versification JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A location string in the data did not have the `BOOK C:V` shape.
    #[error("malformed location '{text}'")]
    MalformedLocation {
        /// The offending location text.
        text: String,
    },

    /// A location string named a book code outside the canonical set.
    #[error(transparent)]
    UnknownBook(#[from] UnknownBookCode),

    /// No embedded standard versification has the requested id.
    #[error("unknown standard versification '{id}'")]
    UnknownVersification {
        /// The requested identifier.
        id: String,
    },

    /// A range could not be mapped into the target system.
    ///
    /// This is only produced by whole-reference conversion; the location
    /// level reports unmapped results as `None` because they are an
    /// expected outcome, not a failure.
    #[error("no mapping into '{target}' for {book} {range}")]
    UnmappedRange {
        /// The book the range belongs to.
        book: BookId,
        /// A compact rendering of the offending range.
        range: String,
        /// The id of the target system.
        target: String,
    },
}
