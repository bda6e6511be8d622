//! The versification table.

use crate::location::{MappingEntry, VerseLocation};
use std::collections::{HashMap, HashSet};
use versiref_types::{BookId, ChapterVerseLimits};

/// An immutable table describing one way of dividing the text into books,
/// chapters, and verses.
///
/// Construct one programmatically with [`Versification::new`] and the
/// `with_*` builder methods, from parsed data with
/// [`Versification::from_data`](crate::loader), or from the embedded
/// standard tables with [`Versification::standard`]. Once built, a
/// versification is immutable and freely shareable across threads.
#[derive(Debug, Clone)]
pub struct Versification {
    id: String,
    max_verses: HashMap<BookId, Vec<i32>>,
    excluded: HashSet<(BookId, u32, u32)>,
    entries: Vec<MappingEntry>,
    // Source location -> index into entries. First entry wins on duplicates;
    // the collection is ordered and later duplicates are data errors.
    forward: HashMap<VerseLocation, usize>,
}

impl Versification {
    /// Create a versification from per-book verse count tables.
    ///
    /// Each book maps to a vector whose `n`-th element is the last verse
    /// number of chapter `n + 1`.
    pub fn new(id: impl Into<String>, max_verses: HashMap<BookId, Vec<i32>>) -> Self {
        Versification {
            id: id.into(),
            max_verses,
            excluded: HashSet::new(),
            entries: Vec::new(),
            forward: HashMap::new(),
        }
    }

    /// Mark a verse as textually absent in this system.
    pub fn with_excluded_verse(mut self, book: BookId, chapter: u32, verse: u32) -> Self {
        self.excluded.insert((book, chapter, verse));
        self
    }

    /// Add a mapping entry relating a baseline-system location to this
    /// system.
    pub fn with_mapping(mut self, entry: MappingEntry) -> Self {
        let key = entry.source.clone();
        if !self.forward.contains_key(&key) {
            self.forward.insert(key, self.entries.len());
        }
        self.entries.push(entry);
        self
    }

    /// The identifier of this versification (e.g. `"eng"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The number of the last verse of the given chapter, or `-1` when the
    /// book or chapter is unknown to this system.
    ///
    /// Unknown is a sentinel, not a failure: versification data is
    /// frequently incomplete and callers must be able to treat "unknown"
    /// distinctly from "invalid".
    pub fn last_verse(&self, book: BookId, chapter: u32) -> i32 {
        let Some(chapters) = self.max_verses.get(&book) else {
            return -1;
        };
        if chapter == 0 || chapter as usize > chapters.len() {
            return -1;
        }
        chapters[chapter as usize - 1]
    }

    /// Whether the given verse exists in this system.
    ///
    /// False when the verse number is non-positive, exceeds the chapter's
    /// last verse (or the chapter is unknown), or the verse is excluded.
    /// Subverse letters are never part of this check.
    pub fn is_valid(&self, book: BookId, chapter: u32, verse: i32) -> bool {
        if verse <= 0 {
            return false;
        }
        if verse > self.last_verse(book, chapter) {
            return false;
        }
        !self.excluded.contains(&(book, chapter, verse as u32))
    }

    /// Whether this system has any data for the given book.
    pub fn includes(&self, book: BookId) -> bool {
        self.max_verses.contains_key(&book)
    }

    /// The number of chapters of the given book, or zero when unknown.
    pub fn chapter_count(&self, book: BookId) -> usize {
        self.max_verses.get(&book).map_or(0, Vec::len)
    }

    /// Whether the book has exactly one chapter in this system.
    pub fn is_single_chapter(&self, book: BookId) -> bool {
        self.chapter_count(book) == 1
    }

    pub(crate) fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub(crate) fn forward_entry(&self, source: &VerseLocation) -> Option<&MappingEntry> {
        self.forward
            .get(source)
            .or_else(|| {
                if source.subverse.is_empty() {
                    None
                } else {
                    self.forward.get(&source.without_subverse())
                }
            })
            .map(|&index| &self.entries[index])
    }
}

impl ChapterVerseLimits for Versification {
    fn includes(&self, book: BookId) -> bool {
        Versification::includes(self, book)
    }

    fn last_verse(&self, book: BookId, chapter: u32) -> i32 {
        Versification::last_verse(self, book, chapter)
    }

    fn is_excluded(&self, book: BookId, chapter: u32, verse: u32) -> bool {
        self.excluded.contains(&(book, chapter, verse))
    }
}
