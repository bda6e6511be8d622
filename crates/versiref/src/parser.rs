//! The reference parser.
//!
//! The grammar is hand-rolled recursive descent over a byte cursor. A
//! reference is a book name followed by chapter groups; each chapter
//! group is either a chapter with a verse list (`3:16, 18-20`) or a bare
//! chapter span (`3` or `3-4`). Single-chapter books additionally accept
//! a bare verse list with the chapter implied (`Jude 4-6`), and the
//! longer of the two readings wins so that `Jude 1:5` is never cut short
//! at `Jude 1`.
//!
//! Range separators are permissive on input: hyphens and en dashes are
//! always recognized, plus the style's own separator when it differs.
//! Everything else follows the style exactly, with separators matched
//! after their surrounding whitespace is skipped.

use crate::error::{Error, Result};
use crate::matcher::NameMatcher;
use std::sync::Arc;
use versiref_style::RefStyle;
use versiref_types::{BookId, SimpleBibleRef, VerseRange};
use versiref_versification::{BibleRef, Versification};

/// Options for [`RefParser::parse_with`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Check every parsed location against the versification.
    pub validate: bool,
    /// Turn failures into an empty reference instead of an error.
    pub silent: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            validate: true,
            silent: false,
        }
    }
}

/// Parses references written in one style under one versification.
///
/// Construction compiles the style's recognized names into a match table;
/// parsing itself allocates nothing but the output. The parser is
/// immutable and can be shared across threads.
pub struct RefParser {
    style: Arc<RefStyle>,
    versification: Arc<Versification>,
    matcher: NameMatcher,
}

/// A verse range as first parsed, before chapter numbers that can only
/// be determined from surrounding context are filled in.
struct PendingRange {
    start_verse: i32,
    start_subverse: String,
    end_chapter: Option<u32>,
    end_verse: i32,
    end_subverse: String,
    span: (usize, usize),
}

/// A fully parsed range with its source span.
pub(crate) struct SpannedRange {
    range: VerseRange,
    span: (usize, usize),
}

/// One book's worth of parsed reference, with its source span.
pub(crate) struct ParsedRef {
    book: BookId,
    ranges: Vec<SpannedRange>,
    pub(crate) span: (usize, usize),
}

#[derive(Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pub(crate) pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, pos: usize) -> Cursor<'a> {
        Cursor { text, pos }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Match a literal after skipping leading whitespace.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if literal.is_empty() {
            return false;
        }
        let save = self.pos;
        self.skip_whitespace();
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            self.pos = save;
            false
        }
    }

    /// Match a literal with no leading whitespace allowed.
    fn eat_adjacent(&mut self, literal: &str) -> bool {
        if !literal.is_empty() && self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Match an unsigned integer after skipping leading whitespace.
    ///
    /// Numbers that cannot be stored in a verse field are a non-match,
    /// never a truncated value.
    fn eat_integer(&mut self) -> Option<u32> {
        let save = self.pos;
        self.skip_whitespace();
        let digits = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        match self.rest()[..digits].parse() {
            Ok(number) if digits > 0 && number <= i32::MAX as u32 => {
                self.pos += digits;
                Some(number)
            }
            _ => {
                self.pos = save;
                None
            }
        }
    }

    /// Match a subverse letter or two, adjacent to the previous token.
    ///
    /// At most two lowercase letters, and the next character must not be
    /// another lowercase letter, so `16b` has a subverse but `16bis`
    /// does not.
    fn eat_subverse(&mut self) -> Option<String> {
        let letters = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_lowercase)
            .count();
        if letters == 0 || letters > 2 {
            return None;
        }
        let subverse = self.rest()[..letters].to_owned();
        self.pos += letters;
        Some(subverse)
    }
}

impl RefParser {
    /// Create a parser for a style and versification.
    ///
    /// Name ambiguities are impossible here: the style resolved or
    /// rejected them when it was built.
    pub fn new(style: Arc<RefStyle>, versification: Arc<Versification>) -> RefParser {
        let matcher = NameMatcher::new(&style);
        tracing::debug!(
            versification = versification.id(),
            "compiled reference grammar"
        );
        RefParser {
            style,
            versification,
            matcher,
        }
    }

    /// The style this parser reads and writes.
    pub fn style(&self) -> &Arc<RefStyle> {
        &self.style
    }

    /// The versification parsed references are expressed in.
    pub fn versification(&self) -> &Arc<Versification> {
        &self.versification
    }

    /// Parse the whole text as a reference, validating every location.
    pub fn parse(&self, text: &str) -> Result<BibleRef> {
        self.parse_with(text, ParseOptions::default())
    }

    /// Parse the whole text as a reference.
    pub fn parse_with(&self, text: &str, options: ParseOptions) -> Result<BibleRef> {
        match self.parse_inner(text, options.validate) {
            Err(_) if options.silent => Ok(BibleRef::empty(Arc::clone(&self.versification))),
            other => other,
        }
    }

    /// Parse the whole text as a reference to a single book.
    pub fn parse_simple(&self, text: &str) -> Result<SimpleBibleRef> {
        single_book(self.parse(text)?)
    }

    /// Parse the whole text as a reference to a single book.
    ///
    /// With `silent` set, every failure (including a reference spanning
    /// more than one book) yields `Ok(None)` instead of an error.
    pub fn parse_simple_with(
        &self,
        text: &str,
        options: ParseOptions,
    ) -> Result<Option<SimpleBibleRef>> {
        let parsed = self
            .parse_inner(text, options.validate)
            .and_then(single_book);
        match parsed {
            Ok(sref) => Ok(Some(sref)),
            Err(_) if options.silent => Ok(None),
            Err(error) => Err(error),
        }
    }

    fn parse_inner(&self, text: &str, validate: bool) -> Result<BibleRef> {
        let mut cursor = Cursor::new(text, 0);
        let mut parsed = Vec::new();
        match self.reference(&mut cursor) {
            Some(first) => parsed.push(first),
            None => {
                return Err(Error::Parse {
                    message: "expected a book name".to_owned(),
                    position: cursor.pos,
                });
            }
        }
        loop {
            let save = cursor.pos;
            if !cursor.eat_literal(self.style.book_separator.trim()) {
                break;
            }
            match self.reference(&mut cursor) {
                Some(next) => parsed.push(next),
                None => {
                    cursor.pos = save;
                    break;
                }
            }
        }
        cursor.skip_whitespace();
        if !cursor.at_end() {
            return Err(Error::Parse {
                message: "unexpected trailing text".to_owned(),
                position: cursor.pos,
            });
        }
        if validate {
            for reference in &parsed {
                self.check_valid(reference)?;
            }
        }
        let refs = parsed
            .into_iter()
            .map(|reference| self.materialize(text, reference))
            .collect();
        Ok(BibleRef::new(Arc::clone(&self.versification), refs))
    }

    /// Parse one book's reference at the cursor. Used by both whole-text
    /// parsing and scanning; returns `None` without consuming on failure.
    pub(crate) fn reference(&self, cursor: &mut Cursor<'_>) -> Option<ParsedRef> {
        let save = cursor.pos;
        cursor.skip_whitespace();
        let book_start = cursor.pos;
        let Some((book, length)) = self.matcher.match_at(cursor.text, cursor.pos) else {
            cursor.pos = save;
            return None;
        };
        cursor.pos += length;

        let mut full_cursor = cursor.clone();
        let full = self.chapter_list(&mut full_cursor);
        let chosen = if self.versification.is_single_chapter(book) {
            let mut bare_cursor = cursor.clone();
            let bare = self.bare_verse_list(&mut bare_cursor);
            // Prefer the longer reading; on a tie the implied-chapter
            // verse reading wins, so "Jude 5" is verse 5, not chapter 5.
            match (full, bare) {
                (Some(ranges), None) => {
                    *cursor = full_cursor;
                    Some(ranges)
                }
                (None, Some(ranges)) => {
                    *cursor = bare_cursor;
                    Some(ranges)
                }
                (Some(full_ranges), Some(bare_ranges)) => {
                    if full_cursor.pos > bare_cursor.pos {
                        *cursor = full_cursor;
                        Some(full_ranges)
                    } else {
                        *cursor = bare_cursor;
                        Some(bare_ranges)
                    }
                }
                (None, None) => None,
            }
        } else {
            full.map(|ranges| {
                *cursor = full_cursor;
                ranges
            })
        };
        let Some(mut ranges) = chosen else {
            cursor.pos = save;
            return None;
        };
        if let Some(first) = ranges.first_mut() {
            first.span.0 = book_start;
        }
        Some(ParsedRef {
            book,
            ranges,
            span: (book_start, cursor.pos),
        })
    }

    /// Chapter groups joined by the chapter separator. A book name after
    /// a separator belongs to the next reference, not to this list.
    fn chapter_list(&self, cursor: &mut Cursor<'_>) -> Option<Vec<SpannedRange>> {
        let mut ranges = self.chapter_group(cursor)?;
        loop {
            let save = cursor.pos;
            if !cursor.eat_literal(self.style.chapter_separator.trim()) {
                break;
            }
            let mut probe = cursor.clone();
            probe.skip_whitespace();
            if self.matcher.match_at(probe.text, probe.pos).is_some() {
                cursor.pos = save;
                break;
            }
            match self.chapter_group(cursor) {
                Some(more) => ranges.extend(more),
                None => {
                    cursor.pos = save;
                    break;
                }
            }
        }
        Some(ranges)
    }

    /// One chapter group: `C:V...` with a verse list, or a bare chapter
    /// span `C` / `C-C'`.
    fn chapter_group(&self, cursor: &mut Cursor<'_>) -> Option<Vec<SpannedRange>> {
        let save = cursor.pos;
        cursor.skip_whitespace();
        let chapter_start = cursor.pos;
        let Some(chapter) = cursor.eat_integer() else {
            cursor.pos = save;
            return None;
        };
        if cursor.eat_literal(&self.style.chapter_verse_separator) {
            let Some(pending) = self.verse_list(cursor) else {
                cursor.pos = save;
                return None;
            };
            // A range that crosses into a later chapter moves the
            // chapter for everything after it, so "23:50-24:1, 5"
            // puts verse 5 in chapter 24.
            let mut current = chapter;
            let mut ranges = Vec::with_capacity(pending.len());
            for (index, item) in pending.into_iter().enumerate() {
                let start_chapter = current;
                let end_chapter = item.end_chapter.unwrap_or(current);
                current = end_chapter;
                let mut span = item.span;
                if index == 0 {
                    span.0 = chapter_start;
                }
                ranges.push(SpannedRange {
                    range: VerseRange {
                        start_chapter: start_chapter.to_string(),
                        start_verse: item.start_verse,
                        start_subverse: item.start_subverse,
                        end_chapter: end_chapter.to_string(),
                        end_verse: item.end_verse,
                        end_subverse: item.end_subverse,
                        original_text: None,
                    },
                    span,
                });
            }
            Some(ranges)
        } else {
            let mut end_chapter = chapter;
            let save_end = cursor.pos;
            if self.eat_range_separator(cursor) {
                match cursor.eat_integer() {
                    Some(chapter) => end_chapter = chapter,
                    None => cursor.pos = save_end,
                }
            }
            Some(vec![SpannedRange {
                range: VerseRange::whole_chapters(chapter, end_chapter),
                span: (chapter_start, cursor.pos),
            }])
        }
    }

    /// Verse ranges joined by the verse separator.
    fn verse_list(&self, cursor: &mut Cursor<'_>) -> Option<Vec<PendingRange>> {
        let mut ranges = vec![self.verse_range(cursor, true)?];
        loop {
            let save = cursor.pos;
            if !cursor.eat_literal(self.style.verse_separator.trim()) {
                break;
            }
            match self.verse_range(cursor, true) {
                Some(range) => ranges.push(range),
                None => {
                    cursor.pos = save;
                    break;
                }
            }
        }
        Some(ranges)
    }

    /// A bare verse list for a single-chapter book, chapter implied 1.
    fn bare_verse_list(&self, cursor: &mut Cursor<'_>) -> Option<Vec<SpannedRange>> {
        let mut pending = vec![self.verse_range(cursor, false)?];
        loop {
            let save = cursor.pos;
            if !cursor.eat_literal(self.style.verse_separator.trim()) {
                break;
            }
            match self.verse_range(cursor, false) {
                Some(range) => pending.push(range),
                None => {
                    cursor.pos = save;
                    break;
                }
            }
        }
        Some(
            pending
                .into_iter()
                .map(|item| SpannedRange {
                    range: VerseRange {
                        start_chapter: "1".to_owned(),
                        start_verse: item.start_verse,
                        start_subverse: item.start_subverse,
                        end_chapter: "1".to_owned(),
                        end_verse: item.end_verse,
                        end_subverse: item.end_subverse,
                        original_text: None,
                    },
                    span: item.span,
                })
                .collect(),
        )
    }

    /// One verse range: `V[sub]`, optionally followed by a following
    /// suffix or a range end (`V'`, `C':V'`, or a bare subverse).
    fn verse_range(&self, cursor: &mut Cursor<'_>, allow_end_chapter: bool) -> Option<PendingRange> {
        let save = cursor.pos;
        cursor.skip_whitespace();
        let span_start = cursor.pos;
        let Some(start_verse) = cursor.eat_integer() else {
            cursor.pos = save;
            return None;
        };
        let mut start_subverse = cursor.eat_subverse().unwrap_or_default();
        let mut end_chapter = None;
        let mut end_verse = None;
        let mut end_subverse = None;
        let mut following_one = false;
        let mut following_many = false;
        if cursor.eat_adjacent(&self.style.following_verses) {
            following_many = true;
        } else if cursor.eat_adjacent(&self.style.following_verse) {
            following_one = true;
        } else {
            let save_end = cursor.pos;
            let mut matched = false;
            if self.eat_range_separator(cursor) {
                if let Some(number) = cursor.eat_integer() {
                    if allow_end_chapter && cursor.eat_literal(&self.style.chapter_verse_separator)
                    {
                        if let Some(verse) = cursor.eat_integer() {
                            end_chapter = Some(number);
                            end_verse = Some(verse as i32);
                            end_subverse = cursor.eat_subverse();
                            matched = true;
                        }
                    } else {
                        end_verse = Some(number as i32);
                        end_subverse = cursor.eat_subverse();
                        matched = true;
                    }
                } else if let Some(subverse) = cursor.eat_subverse() {
                    end_subverse = Some(subverse);
                    matched = true;
                }
            }
            if !matched {
                cursor.pos = save_end;
            }
        }
        // A following suffix of one or two lowercase letters gets eaten
        // as a subverse above; reinterpret it.
        if end_verse.is_none() && !following_one && !following_many {
            if start_subverse == self.style.following_verses {
                start_subverse.clear();
                following_many = true;
            } else if start_subverse == self.style.following_verse {
                start_subverse.clear();
                following_one = true;
            }
        }
        let (end_verse, end_subverse) = if following_many {
            (-1, String::new())
        } else if following_one {
            match (start_verse as i32).checked_add(1) {
                Some(next) => (next, String::new()),
                None => {
                    cursor.pos = save;
                    return None;
                }
            }
        } else {
            (
                end_verse.unwrap_or(start_verse as i32),
                end_subverse.unwrap_or_else(|| start_subverse.clone()),
            )
        };
        Some(PendingRange {
            start_verse: start_verse as i32,
            start_subverse,
            end_chapter: if following_one || following_many {
                None
            } else {
                end_chapter
            },
            end_verse,
            end_subverse,
            span: (span_start, cursor.pos),
        })
    }

    /// Hyphen, en dash, or the style's own range separator.
    fn eat_range_separator(&self, cursor: &mut Cursor<'_>) -> bool {
        if cursor.eat_literal("-") || cursor.eat_literal("\u{2013}") {
            return true;
        }
        let styled = self.style.range_separator.as_str();
        styled != "-" && styled != "\u{2013}" && cursor.eat_literal(styled)
    }

    pub(crate) fn materialize(&self, text: &str, parsed: ParsedRef) -> SimpleBibleRef {
        let ranges = parsed
            .ranges
            .into_iter()
            .map(|item| {
                item.range
                    .with_original_text(&text[item.span.0..item.span.1])
            })
            .collect();
        SimpleBibleRef::new(parsed.book, ranges)
            .with_original_text(&text[parsed.span.0..parsed.span.1])
    }

    pub(crate) fn is_parsed_ref_valid(&self, parsed: &ParsedRef) -> bool {
        let probe = SimpleBibleRef::new(
            parsed.book,
            parsed
                .ranges
                .iter()
                .map(|item| item.range.clone())
                .collect(),
        );
        probe.is_valid(&*self.versification)
    }

    fn check_valid(&self, parsed: &ParsedRef) -> Result<()> {
        if !self.versification.includes(parsed.book) {
            return Err(Error::InvalidLocation {
                book: parsed.book,
                chapter: 0,
                verse: -1,
                position: parsed.span.0,
            });
        }
        for item in &parsed.ranges {
            let probe = SimpleBibleRef::new(parsed.book, vec![item.range.clone()]);
            if probe.is_valid(&*self.versification) {
                continue;
            }
            let range = &item.range;
            let start_chapter = range.start_chapter_number().unwrap_or(0);
            let end_chapter = range.end_chapter_number().unwrap_or(0);
            let last = self.versification.last_verse(parsed.book, end_chapter);
            let (chapter, verse) = if last < 0 || range.end_verse > last {
                (end_chapter, range.end_verse)
            } else {
                (start_chapter, range.start_verse)
            };
            return Err(Error::InvalidLocation {
                book: parsed.book,
                chapter,
                verse,
                position: item.span.0,
            });
        }
        Ok(())
    }
}

fn single_book(bref: BibleRef) -> Result<SimpleBibleRef> {
    let mut refs = bref.refs;
    if refs.len() == 1 {
        Ok(refs.swap_remove(0))
    } else {
        Err(Error::MultipleBooks)
    }
}
