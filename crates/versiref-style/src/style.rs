//! Reference style definitions.
//!
//! A [`RefStyle`] holds the data that specifies one publication's
//! conventions for writing references: per-book name tables, the inverted
//! name-to-book map used for recognition, and the separator strings.
//! Formatting and parsing are done elsewhere, with a style as their
//! specification.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use versiref_types::BookId;

/// Which name table formatting draws from by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameForm {
    /// Short names such as "Gen" or "1 Cor".
    #[default]
    Abbreviation,
    /// Spelled-out names such as "Genesis" or "1 Corinthians".
    Full,
}

/// The formatting and recognition conventions of one citation style.
///
/// Immutable after construction. The recognized-name map is built by
/// inverting the name tables, so every collision is resolved (or rejected)
/// up front and parsing never has to deal with an ambiguous name.
#[derive(Debug, Clone)]
pub struct RefStyle {
    abbreviations: BTreeMap<BookId, String>,
    full_names: BTreeMap<BookId, String>,
    default_form: NameForm,
    recognized: BTreeMap<String, BookId>,
    /// Separates the chapter number from its verse ranges, e.g. `":"`.
    pub chapter_verse_separator: String,
    /// Joins verse ranges within one chapter, e.g. `", "`.
    pub verse_separator: String,
    /// Joins ranges that open a new chapter, e.g. `"; "`.
    pub chapter_separator: String,
    /// Joins references to different books, e.g. `"; "`.
    pub book_separator: String,
    /// Separates the two ends of a range. Defaults to an en dash.
    pub range_separator: String,
    /// Suffix meaning "and the verse after it", e.g. `"f"`.
    pub following_verse: String,
    /// Suffix meaning "and an unspecified number of verses after it",
    /// e.g. `"ff"`.
    pub following_verses: String,
    /// Whether consecutive ranges in one chapter omit the repeated
    /// chapter number.
    pub elide_repeated_chapter: bool,
}

impl RefStyle {
    /// Create a style from an abbreviation table, with default separators.
    ///
    /// The table is inverted to seed the recognized names. Names are
    /// compared the way recognition matches them, ignoring ASCII case;
    /// a collision between two books fails with
    /// [`Error::AmbiguousName`] unless the
    /// colliding pair is PSA/PSAS or EST/ESG, which share abbreviations
    /// with their companion book in every standard name set and resolve
    /// to PSA and EST respectively.
    pub fn new(abbreviations: BTreeMap<BookId, String>) -> Result<RefStyle> {
        let mut style = RefStyle {
            abbreviations: BTreeMap::new(),
            full_names: BTreeMap::new(),
            default_form: NameForm::Abbreviation,
            recognized: BTreeMap::new(),
            chapter_verse_separator: ":".to_owned(),
            verse_separator: ", ".to_owned(),
            chapter_separator: "; ".to_owned(),
            book_separator: "; ".to_owned(),
            range_separator: "\u{2013}".to_owned(),
            following_verse: "f".to_owned(),
            following_verses: "ff".to_owned(),
            elide_repeated_chapter: true,
        };
        for (book, name) in &abbreviations {
            style.add_recognized(name.clone(), *book)?;
        }
        style.abbreviations = abbreviations;
        Ok(style)
    }

    /// Add a table of full names, recognized alongside the abbreviations.
    pub fn with_full_names(mut self, full_names: BTreeMap<BookId, String>) -> Result<Self> {
        for (book, name) in &full_names {
            self.add_recognized(name.clone(), *book)?;
        }
        self.full_names = full_names;
        Ok(self)
    }

    /// Recognize an extra name when parsing, without using it to format.
    pub fn with_recognized_name(mut self, name: impl Into<String>, book: BookId) -> Result<Self> {
        self.add_recognized(name.into(), book)?;
        Ok(self)
    }

    /// Set which name table formatting draws from.
    pub fn with_default_form(mut self, form: NameForm) -> Self {
        self.default_form = form;
        self
    }

    pub fn with_chapter_verse_separator(mut self, separator: impl Into<String>) -> Self {
        self.chapter_verse_separator = separator.into();
        self
    }

    pub fn with_verse_separator(mut self, separator: impl Into<String>) -> Self {
        self.verse_separator = separator.into();
        self
    }

    pub fn with_chapter_separator(mut self, separator: impl Into<String>) -> Self {
        self.chapter_separator = separator.into();
        self
    }

    pub fn with_book_separator(mut self, separator: impl Into<String>) -> Self {
        self.book_separator = separator.into();
        self
    }

    pub fn with_range_separator(mut self, separator: impl Into<String>) -> Self {
        self.range_separator = separator.into();
        self
    }

    /// Set the "following verse" and "following verses" suffixes.
    pub fn with_following(mut self, one: impl Into<String>, many: impl Into<String>) -> Self {
        self.following_verse = one.into();
        self.following_verses = many.into();
        self
    }

    pub fn with_chapter_elision(mut self, elide: bool) -> Self {
        self.elide_repeated_chapter = elide;
        self
    }

    /// The name table formatting draws from by default.
    pub fn default_form(&self) -> NameForm {
        self.default_form
    }

    /// The abbreviation for a book, if the style has one.
    pub fn abbreviation(&self, book: BookId) -> Option<&str> {
        self.abbreviations.get(&book).map(String::as_str)
    }

    /// The full name for a book, if the style has one.
    pub fn full_name(&self, book: BookId) -> Option<&str> {
        self.full_names.get(&book).map(String::as_str)
    }

    /// The display name for a book in the default form, falling back to
    /// the other table when the preferred one has no entry.
    pub fn name(&self, book: BookId) -> Option<&str> {
        match self.default_form {
            NameForm::Abbreviation => self.abbreviation(book).or_else(|| self.full_name(book)),
            NameForm::Full => self.full_name(book).or_else(|| self.abbreviation(book)),
        }
    }

    /// Every name the style recognizes when parsing, with its book.
    pub fn recognized_names(&self) -> impl Iterator<Item = (&str, BookId)> {
        self.recognized.iter().map(|(name, book)| (name.as_str(), *book))
    }

    /// Look up a recognized name exactly as written.
    pub fn resolve_name(&self, name: &str) -> Option<BookId> {
        self.recognized.get(name).copied()
    }

    fn add_recognized(&mut self, name: String, book: BookId) -> Result<()> {
        // Recognition is case-insensitive, so names that collide in any
        // mix of cases must resolve to a single book.
        let mut winner = book;
        for (existing_name, existing) in &self.recognized {
            if existing_name.eq_ignore_ascii_case(&name) && *existing != winner {
                winner =
                    resolve_collision(*existing, winner).ok_or_else(|| Error::AmbiguousName {
                        name: name.clone(),
                        first: *existing,
                        second: book,
                    })?;
            }
        }
        for (existing_name, existing) in self.recognized.iter_mut() {
            if existing_name.eq_ignore_ascii_case(&name) {
                *existing = winner;
            }
        }
        self.recognized.insert(name, winner);
        Ok(())
    }
}

/// The superscription book PSAS and the Greek additions ESG share
/// abbreviations with PSA and EST; the plain book wins the name.
fn resolve_collision(first: BookId, second: BookId) -> Option<BookId> {
    match (first, second) {
        (BookId::Psa, BookId::Psas) | (BookId::Psas, BookId::Psa) => Some(BookId::Psa),
        (BookId::Est, BookId::Esg) | (BookId::Esg, BookId::Est) => Some(BookId::Est),
        _ => None,
    }
}
