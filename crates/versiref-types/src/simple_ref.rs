//! Naive per-book references.

use crate::book::BookId;
use crate::limits::ChapterVerseLimits;
use crate::range::VerseRange;
use serde::{Deserialize, Serialize};

/// A sequence of verse ranges within a single book.
///
/// The ranges are kept in citation order, which is not necessarily numeric
/// order. An empty range list refers to the entire book.
///
/// This type is "naive": it carries no versification system, analogous to a
/// timestamp without a time zone. Operations that need chapter/verse
/// validity take a [`ChapterVerseLimits`] explicitly.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct SimpleBibleRef {
    /// The book this reference is scoped to.
    pub book_id: BookId,
    /// The cited ranges, in citation order.
    pub ranges: Vec<VerseRange>,
    /// The text this reference was parsed from, if any. Provenance only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_text: Option<String>,
}

impl PartialEq for SimpleBibleRef {
    fn eq(&self, other: &Self) -> bool {
        self.book_id == other.book_id && self.ranges == other.ranges
    }
}

impl SimpleBibleRef {
    /// Create a reference with the given ranges.
    pub fn new(book_id: BookId, ranges: Vec<VerseRange>) -> Self {
        SimpleBibleRef {
            book_id,
            ranges,
            original_text: None,
        }
    }

    /// Create a reference to an entire book.
    pub fn whole_book(book_id: BookId) -> Self {
        SimpleBibleRef::new(book_id, Vec::new())
    }

    /// Create a reference with a single range of verses.
    pub fn for_range(book_id: BookId, chapter: u32, start_verse: i32, end_verse: i32) -> Self {
        SimpleBibleRef::new(book_id, vec![VerseRange::verses(chapter, start_verse, end_verse)])
    }

    /// Attach provenance text.
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// True if this reference refers to the entire book.
    ///
    /// This regards the form of the reference rather than its content: it is
    /// true for "John" but false for "John 1-21".
    pub fn is_whole_book(&self) -> bool {
        self.ranges.is_empty()
    }

    /// True if this reference does not specify verse limits.
    ///
    /// True for "John" and "John 6", false for "John 1:1-51".
    pub fn is_whole_chapters(&self) -> bool {
        self.ranges.iter().all(VerseRange::is_whole_chapters)
    }

    /// Split this reference into one single-range reference per verse range.
    ///
    /// Each produced reference keeps the book id and takes its provenance
    /// text from the range it wraps.
    pub fn ranges_iter(&self) -> impl Iterator<Item = SimpleBibleRef> + '_ {
        self.ranges.iter().map(|range| SimpleBibleRef {
            book_id: self.book_id,
            ranges: vec![range.clone()],
            original_text: range.original_text.clone(),
        })
    }

    /// Check this reference against the limits of a versification system.
    ///
    /// The book must be included in the system, every range must be
    /// well-formed, every cited chapter must exist, no specified endpoint
    /// may exceed its chapter's last verse, and no specified endpoint may be
    /// an excluded verse.
    pub fn is_valid(&self, limits: &impl ChapterVerseLimits) -> bool {
        if !limits.includes(self.book_id) {
            return false;
        }
        self.ranges.iter().all(|range| self.range_is_valid(range, limits))
    }

    fn range_is_valid(&self, range: &VerseRange, limits: &impl ChapterVerseLimits) -> bool {
        if !range.is_well_formed() {
            return false;
        }
        let (Some(start_chapter), Some(end_chapter)) =
            (range.start_chapter_number(), range.end_chapter_number())
        else {
            // Non-numeric chapter labels cannot be checked against a table.
            return false;
        };
        if limits.last_verse(self.book_id, end_chapter) < 0 {
            return false;
        }
        // The start endpoint only needs its own check when it lies in a
        // different chapter than the end, or the end is unspecified.
        if (start_chapter != end_chapter || range.end_verse < 0)
            && range.start_verse > limits.last_verse(self.book_id, start_chapter)
        {
            return false;
        }
        if range.end_verse > limits.last_verse(self.book_id, end_chapter) {
            return false;
        }
        if range.start_verse >= 1
            && limits.is_excluded(self.book_id, start_chapter, range.start_verse as u32)
        {
            return false;
        }
        if range.end_verse >= 1
            && limits.is_excluded(self.book_id, end_chapter, range.end_verse as u32)
        {
            return false;
        }
        true
    }
}
