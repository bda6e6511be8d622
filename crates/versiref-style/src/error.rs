//! Error types for style construction and book-name data.

use thiserror::Error;
use versiref_types::{BookId, UnknownBookCode};

/// Errors raised while loading name data or building a [`RefStyle`].
///
/// [`RefStyle`]: crate::RefStyle
#[derive(Debug, Error)]
pub enum Error {
    /// Two books share a recognized name and neither is the
    /// superscription or Greek-addition companion of the other.
    #[error("both {first} and {second} are written as {name:?}")]
    AmbiguousName {
        /// The colliding name, as it appears in the name table.
        name: String,
        /// The book that claimed the name first.
        first: BookId,
        /// The book that collided with it.
        second: BookId,
    },

    /// Malformed book-name JSON.
    #[error("invalid book name data: {0}")]
    Json(#[from] serde_json::Error),

    /// A name table keyed by a code outside the canonical book list.
    #[error(transparent)]
    UnknownBook(#[from] UnknownBookCode),

    /// No embedded name set with the requested identifier.
    #[error("unknown book name set {id:?}")]
    UnknownNameSet {
        /// The identifier that was requested.
        id: String,
    },

    /// No registered style with the requested identifier.
    #[error("unknown reference style {id:?}")]
    UnknownStyle {
        /// The identifier that was requested.
        id: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
