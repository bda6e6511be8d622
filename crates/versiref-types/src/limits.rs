//! The seam between naive references and versification tables.

use crate::book::BookId;

/// Read-only access to the chapter/verse limits of a versification system.
///
/// Implemented by `Versification` in versiref-versification. The naive
/// reference types validate against this trait so that they never depend on
/// a concrete versification.
pub trait ChapterVerseLimits {
    /// Whether the system has any data for the given book.
    fn includes(&self, book: BookId) -> bool;

    /// The last valid verse number of the given chapter, or `-1` when the
    /// book or chapter is unknown to the system.
    ///
    /// The `-1` sentinel is deliberate: versification data is frequently
    /// incomplete, and callers must be able to tell "unknown" apart from
    /// "this chapter has no verses."
    fn last_verse(&self, book: BookId, chapter: u32) -> i32;

    /// Whether the verse is textually absent in this system despite lying
    /// within the chapter's range.
    fn is_excluded(&self, _book: BookId, _chapter: u32, _verse: u32) -> bool {
        false
    }
}
