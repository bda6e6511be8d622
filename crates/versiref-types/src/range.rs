//! Verse ranges within a single book.

use serde::{Deserialize, Serialize};

/// A range of verses within one book.
///
/// A range has a start and end point, each defined by chapter label, verse
/// number, and subverse letter. Chapters are string labels rather than
/// integers because some traditions cite non-numeric chapter labels (the
/// canonical scheme resolves those to numbered chapters of a distinct book
/// id); only numeric labels can be validated or mapped.
///
/// A verse number below zero means "unspecified". If both verses are
/// unspecified the range covers whole chapters. If the start verse is
/// specified and the end verse is not, the range is open-ended ("16ff"),
/// which is only well-formed within a single chapter. Equal start and end
/// fields denote a single verse.
///
/// Citation order is preserved: a range whose start textually exceeds its
/// end is representable, and [`is_well_formed`](VerseRange::is_well_formed)
/// reports it rather than any constructor rejecting it.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct VerseRange {
    /// Chapter label of the start point.
    pub start_chapter: String,
    /// Verse number of the start point; `-1` means unspecified.
    pub start_verse: i32,
    /// Subverse letter(s) of the start point; empty means none.
    pub start_subverse: String,
    /// Chapter label of the end point.
    pub end_chapter: String,
    /// Verse number of the end point; `-1` means unspecified.
    pub end_verse: i32,
    /// Subverse letter(s) of the end point; empty means none.
    pub end_subverse: String,
    /// The text this range was parsed from, if any. Provenance only: two
    /// ranges that differ only here compare equal.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_text: Option<String>,
}

impl PartialEq for VerseRange {
    fn eq(&self, other: &Self) -> bool {
        self.start_chapter == other.start_chapter
            && self.start_verse == other.start_verse
            && self.start_subverse == other.start_subverse
            && self.end_chapter == other.end_chapter
            && self.end_verse == other.end_verse
            && self.end_subverse == other.end_subverse
    }
}

impl VerseRange {
    /// Create a range with numeric chapters and no subverses.
    pub fn new(start_chapter: u32, start_verse: i32, end_chapter: u32, end_verse: i32) -> Self {
        VerseRange {
            start_chapter: start_chapter.to_string(),
            start_verse,
            start_subverse: String::new(),
            end_chapter: end_chapter.to_string(),
            end_verse,
            end_subverse: String::new(),
            original_text: None,
        }
    }

    /// A single verse.
    pub fn verse(chapter: u32, verse: i32) -> Self {
        VerseRange::new(chapter, verse, chapter, verse)
    }

    /// A run of verses within one chapter.
    pub fn verses(chapter: u32, start_verse: i32, end_verse: i32) -> Self {
        VerseRange::new(chapter, start_verse, chapter, end_verse)
    }

    /// A whole chapter, with no verse limits.
    pub fn whole_chapter(chapter: u32) -> Self {
        VerseRange::new(chapter, -1, chapter, -1)
    }

    /// A run of whole chapters.
    pub fn whole_chapters(start_chapter: u32, end_chapter: u32) -> Self {
        VerseRange::new(start_chapter, -1, end_chapter, -1)
    }

    /// An open-ended range ("16ff"): a start verse with no specified end.
    pub fn following(chapter: u32, start_verse: i32) -> Self {
        VerseRange::new(chapter, start_verse, chapter, -1)
    }

    /// Attach provenance text.
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// The start chapter as a number, if its label is numeric.
    pub fn start_chapter_number(&self) -> Option<u32> {
        self.start_chapter.parse().ok()
    }

    /// The end chapter as a number, if its label is numeric.
    pub fn end_chapter_number(&self) -> Option<u32> {
        self.end_chapter.parse().ok()
    }

    /// True if this range denotes exactly one verse (or one subverse).
    pub fn is_single_verse(&self) -> bool {
        self.start_verse >= 0
            && self.start_chapter == self.end_chapter
            && self.start_verse == self.end_verse
            && self.start_subverse == self.end_subverse
    }

    /// True if this range does not specify verse limits.
    pub fn is_whole_chapters(&self) -> bool {
        self.start_verse < 0 && self.end_verse < 0
    }

    /// True if this range has a specified start but an unspecified end.
    pub fn is_open_ended(&self) -> bool {
        self.start_verse >= 0 && self.end_verse < 0
    }

    /// Check the local validity rules, independent of any versification.
    ///
    /// Returns false when:
    /// - the range is open-ended but spans more than one chapter,
    /// - the start verse is unspecified but the end verse is specified,
    /// - the start verse exceeds the end verse within one chapter,
    /// - the start chapter exceeds the end chapter, or the chapter labels
    ///   differ and are not both numeric.
    pub fn is_well_formed(&self) -> bool {
        if self.is_open_ended() && self.start_chapter != self.end_chapter {
            return false;
        }
        if self.start_verse < 0 && self.end_verse >= 0 {
            return false;
        }
        if self.start_chapter == self.end_chapter {
            if self.end_verse >= 0 && self.start_verse > self.end_verse {
                return false;
            }
            return true;
        }
        match (self.start_chapter_number(), self.end_chapter_number()) {
            (Some(start), Some(end)) => start <= end,
            // Differing non-numeric labels have no defined order.
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_verse() {
        let range = VerseRange::verse(3, 16);
        assert!(range.is_single_verse());
        assert!(range.is_well_formed());
        assert!(!range.is_whole_chapters());
    }

    #[test]
    fn test_whole_chapters() {
        let range = VerseRange::whole_chapters(3, 4);
        assert!(range.is_whole_chapters());
        assert!(range.is_well_formed());
    }

    #[test]
    fn test_open_ended_must_stay_in_chapter() {
        assert!(VerseRange::following(1, 16).is_well_formed());
        let mut range = VerseRange::following(1, 16);
        range.end_chapter = "2".to_owned();
        assert!(!range.is_well_formed());
    }

    #[test]
    fn test_inverted_range_is_representable_but_ill_formed() {
        let range = VerseRange::verses(5, 12, 3);
        assert_eq!(range.start_verse, 12);
        assert!(!range.is_well_formed());
    }

    #[test]
    fn test_unspecified_start_with_specified_end() {
        let range = VerseRange::new(1, -1, 1, 5);
        assert!(!range.is_well_formed());
    }

    #[test]
    fn test_chapter_order() {
        assert!(VerseRange::new(23, 50, 24, 12).is_well_formed());
        assert!(!VerseRange::new(24, 12, 23, 50).is_well_formed());
    }

    #[test]
    fn test_equality_ignores_provenance() {
        let a = VerseRange::verse(3, 16);
        let b = VerseRange::verse(3, 16).with_original_text("Jn 3:16");
        assert_eq!(a, b);
    }
}
