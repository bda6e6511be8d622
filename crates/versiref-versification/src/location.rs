//! Verse locations and mapping entries.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use versiref_types::BookId;

/// A single location: book, chapter, verse, and optional subverse letter.
///
/// Subverse letters are lowercase and never validated against a table; no
/// canonical enumeration of subverse letters exists across traditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseLocation {
    /// The book.
    pub book: BookId,
    /// The chapter number.
    pub chapter: u32,
    /// The verse number; `-1` means unspecified.
    pub verse: i32,
    /// The subverse letter(s); empty means none.
    pub subverse: String,
}

impl VerseLocation {
    /// Create a location with no subverse.
    pub fn new(book: BookId, chapter: u32, verse: i32) -> Self {
        VerseLocation {
            book,
            chapter,
            verse,
            subverse: String::new(),
        }
    }

    /// Attach a subverse letter.
    pub fn with_subverse(mut self, subverse: impl Into<String>) -> Self {
        self.subverse = subverse.into();
        self
    }

    /// This location without its subverse.
    pub fn without_subverse(&self) -> VerseLocation {
        VerseLocation::new(self.book, self.chapter, self.verse)
    }

    /// Chapter/verse ordering key within one book.
    fn position(&self) -> (u32, i32) {
        (self.chapter, self.verse)
    }
}

impl fmt::Display for VerseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}{}",
            self.book, self.chapter, self.verse, self.subverse
        )
    }
}

impl FromStr for VerseLocation {
    type Err = Error;

    /// Parse a `BOOK C:V[sub]` data string, e.g. `"JOL 3:1"` or `"GEN 1:5a"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedLocation { text: s.to_owned() };
        let (code, rest) = s.trim().split_once(' ').ok_or_else(malformed)?;
        let book: BookId = code.parse()?;
        let (chapter_text, verse_text) = rest.split_once(':').ok_or_else(malformed)?;
        let chapter: u32 = chapter_text.parse().map_err(|_| malformed())?;
        let digits_end = verse_text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(verse_text.len());
        if digits_end == 0 {
            return Err(malformed());
        }
        let verse: i32 = verse_text[..digits_end].parse().map_err(|_| malformed())?;
        let subverse = &verse_text[digits_end..];
        if !subverse.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(malformed());
        }
        Ok(VerseLocation {
            book,
            chapter,
            verse,
            subverse: subverse.to_owned(),
        })
    }
}

/// The target of a mapping entry: a single point or a contiguous range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingTarget {
    /// The source location corresponds to exactly one location.
    Point(VerseLocation),
    /// The source location corresponds to a contiguous run of verses.
    Range {
        /// First location of the run.
        start: VerseLocation,
        /// Last location of the run.
        end: VerseLocation,
    },
}

impl MappingTarget {
    /// Whether the target (point or range) covers the given location.
    pub fn contains(&self, location: &VerseLocation) -> bool {
        match self {
            MappingTarget::Point(point) => {
                point.book == location.book
                    && point.chapter == location.chapter
                    && point.verse == location.verse
            }
            MappingTarget::Range { start, end } => {
                start.book == location.book
                    && start.position() <= location.position()
                    && location.position() <= end.position()
            }
        }
    }
}

impl FromStr for MappingTarget {
    type Err = Error;

    /// Parse a target string: `BOOK C:V[sub]` optionally followed by
    /// `-[C:]V[sub]` for a contiguous range, e.g. `"PSA 51:1-2"` or
    /// `"JOL 2:28-3:2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedLocation { text: s.to_owned() };
        match s.split_once('-') {
            None => Ok(MappingTarget::Point(s.parse()?)),
            Some((start_text, end_text)) => {
                let start: VerseLocation = start_text.parse()?;
                let end = if end_text.contains(':') {
                    format!("{} {}", start.book, end_text).parse()?
                } else {
                    let end_loc: VerseLocation =
                        format!("{} {}:{}", start.book, start.chapter, end_text)
                            .parse()
                            .map_err(|_| malformed())?;
                    end_loc
                };
                Ok(MappingTarget::Range { start, end })
            }
        }
    }
}

/// One directed mapping entry, from a single baseline-system location to a
/// point or contiguous range in the owning system.
///
/// Entries whose source is a range are not supported, matching the
/// authoritative source data's own behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// The location in the baseline ("org") system.
    pub source: VerseLocation,
    /// The corresponding location(s) in the owning system.
    pub target: MappingTarget,
}
