//! Conversion of locations and ranges between versification systems.
//!
//! Mapping entries are always defined relative to the baseline system
//! ("org"): each versification's entries describe how the baseline's
//! coordinates land in that system. Converting from system A to system B
//! therefore composes two legs: A back to the baseline (a reverse lookup
//! over A's entries), then the baseline into B (the forward lookup). Either
//! leg is the identity when the corresponding side has no entry, because
//! most locations align 1:1 across systems.

use crate::location::{MappingTarget, VerseLocation};
use crate::versification::Versification;
use versiref_types::{BookId, VerseRange};

/// The result of mapping a [`VerseRange`]: the target-system book and range.
///
/// The book is carried separately because mapping entries may move a
/// location into a different book id (e.g. Psalm superscriptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRange {
    /// The book the mapped range belongs to.
    pub book: BookId,
    /// The mapped range, with no provenance text.
    pub range: VerseRange,
}

impl Versification {
    /// Map a single location from this system into `target`.
    ///
    /// `is_range_end` states the caller's role for this location: when a
    /// mapping entry's target is a multi-verse range, a range *start*
    /// resolves to the start of that range and a range *end* to its end, so
    /// that mapping an already-correct range never shrinks or inverts it.
    ///
    /// Returns `None` ("unmapped") only when a mapping entry resolves to a
    /// location that fails [`is_valid`](Versification::is_valid) in the
    /// target system; such entries exist in real source data and must not
    /// be applied. Locations with no entry pass through unchanged, and
    /// unspecified (`-1`) verses are never looked up.
    pub fn map_location(
        &self,
        target: &Versification,
        location: &VerseLocation,
        is_range_end: bool,
    ) -> Option<VerseLocation> {
        if location.verse < 0 {
            return Some(location.clone());
        }
        let baseline = self.to_baseline(location);
        target.from_baseline(&baseline, is_range_end)
    }

    /// Map a range from this system into `target`.
    ///
    /// The two endpoints are mapped independently, as two unrelated
    /// single-location lookups; no contiguity is assumed across the mapping
    /// even for multi-chapter ranges. If either endpoint is unmapped, or
    /// the endpoints land in different books, the whole range is unmapped.
    /// Ranges with non-numeric chapter labels cannot be mapped.
    pub fn map_range(
        &self,
        target: &Versification,
        book: BookId,
        range: &VerseRange,
    ) -> Option<MappedRange> {
        let start_chapter = range.start_chapter_number()?;
        let end_chapter = range.end_chapter_number()?;
        let start = self.map_location(
            target,
            &VerseLocation {
                book,
                chapter: start_chapter,
                verse: range.start_verse,
                subverse: range.start_subverse.clone(),
            },
            false,
        )?;
        let end = self.map_location(
            target,
            &VerseLocation {
                book,
                chapter: end_chapter,
                verse: range.end_verse,
                subverse: range.end_subverse.clone(),
            },
            true,
        )?;
        if start.book != end.book {
            return None;
        }
        Some(MappedRange {
            book: start.book,
            range: VerseRange {
                start_chapter: start.chapter.to_string(),
                start_verse: start.verse,
                start_subverse: start.subverse,
                end_chapter: end.chapter.to_string(),
                end_verse: end.verse,
                end_subverse: end.subverse,
                original_text: None,
            },
        })
    }

    /// Convert a location in this system to baseline coordinates.
    ///
    /// A location covered by one of this system's targets maps back to that
    /// entry's source; anything else is already baseline-aligned. The
    /// baseline itself has no entries, so this is the identity there.
    fn to_baseline(&self, location: &VerseLocation) -> VerseLocation {
        for entry in self.entries() {
            if entry.target.contains(location) {
                let mut source = entry.source.clone();
                if source.subverse.is_empty() {
                    source.subverse = location.subverse.clone();
                }
                return source;
            }
        }
        location.clone()
    }

    /// Resolve a baseline location into this system.
    fn from_baseline(
        &self,
        location: &VerseLocation,
        is_range_end: bool,
    ) -> Option<VerseLocation> {
        let Some(entry) = self.forward_entry(location) else {
            // Identity fallback. Deliberately unvalidated: an unknown book
            // or chapter in incomplete data is not the same as a bad
            // mapping target.
            return Some(location.clone());
        };
        let resolved = match &entry.target {
            MappingTarget::Point(point) => point.clone(),
            MappingTarget::Range { start, end } => {
                if is_range_end {
                    end.clone()
                } else {
                    start.clone()
                }
            }
        };
        if self.is_valid(resolved.book, resolved.chapter, resolved.verse) {
            Some(resolved)
        } else {
            None
        }
    }
}
