//! Error types for reference parsing and formatting.

use thiserror::Error;
use versiref_types::BookId;

/// Errors raised while parsing or formatting references.
#[derive(Debug, Error)]
pub enum Error {
    /// The text is not a reference in the parser's style.
    #[error("no reference recognized at byte {position}: {message}")]
    Parse {
        /// What the parser expected or found.
        message: String,
        /// Byte offset where recognition failed.
        position: usize,
    },

    /// A syntactically well-formed reference names a location outside the
    /// versification.
    #[error("{book} {chapter}:{verse} is not a valid location")]
    InvalidLocation {
        /// The cited book.
        book: BookId,
        /// The cited chapter.
        chapter: u32,
        /// The cited verse, `-1` for an unspecified verse.
        verse: i32,
        /// Byte offset of the reference the location came from.
        position: usize,
    },

    /// A single-book parse found references to more than one book.
    #[error("reference names more than one book")]
    MultipleBooks,

    /// The style has no name for a book being formatted.
    #[error("style has no name for {book}")]
    UnknownBookName {
        /// The book without a name.
        book: BookId,
    },

    /// An error from style construction or name data.
    #[error(transparent)]
    Style(#[from] versiref_style::Error),

    /// An error from versification data or conversion.
    #[error(transparent)]
    Versification(#[from] versiref_versification::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
