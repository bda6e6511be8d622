//! Formatting references back into text.

use crate::error::{Error, Result};
use crate::parser::RefParser;
use versiref_style::RefStyle;
use versiref_types::{SimpleBibleRef, VerseRange};
use versiref_versification::{BibleRef, Versification};

/// Format a single-book reference in the given style.
///
/// With a versification, chapter numbers are omitted for one-chapter
/// books ("Jude 5"); without one, the chapter is always written
/// ("Fm 1,8"). The output is undefined for ranges that are not
/// well-formed, mirroring the freedom the parser never exercises.
pub fn format_simple(
    style: &RefStyle,
    versification: Option<&Versification>,
    sref: &SimpleBibleRef,
) -> Result<String> {
    let name = style
        .name(sref.book_id)
        .ok_or(Error::UnknownBookName { book: sref.book_id })?;
    let mut result = name.to_owned();
    let mut last_range: Option<&VerseRange> = None;
    for range in &sref.ranges {
        // Whether the output so far ends with a chapter number that the
        // verse must be joined to.
        let states_chapter = match last_range {
            None => {
                result.push(' ');
                if versification.is_some_and(|v| v.is_single_chapter(sref.book_id)) {
                    false
                } else {
                    result.push_str(&range.start_chapter);
                    true
                }
            }
            Some(last)
                if last.end_chapter == range.start_chapter && style.elide_repeated_chapter =>
            {
                result.push_str(&style.verse_separator);
                false
            }
            Some(_) => {
                result.push_str(&style.chapter_separator);
                result.push_str(&range.start_chapter);
                true
            }
        };
        if range.start_verse >= 0 {
            if states_chapter {
                result.push_str(&style.chapter_verse_separator);
            }
            result.push_str(&range.start_verse.to_string());
            result.push_str(&range.start_subverse);
        }
        if range.end_verse < 0 && range.start_verse >= 0 {
            result.push_str(&style.following_verses);
        } else if range.end_chapter != range.start_chapter
            || range.end_verse != range.start_verse
            || range.end_subverse != range.start_subverse
        {
            result.push_str(&style.range_separator);
            if range.end_chapter != range.start_chapter {
                result.push_str(&range.end_chapter);
                if range.end_verse >= 0 {
                    result.push_str(&style.chapter_verse_separator);
                    result.push_str(&range.end_verse.to_string());
                }
            } else if range.end_verse != range.start_verse {
                result.push_str(&range.end_verse.to_string());
            }
            if range.end_verse >= 0 {
                result.push_str(&range.end_subverse);
            }
        }
        last_range = Some(range);
    }
    Ok(result)
}

impl RefParser {
    /// Format a reference in this parser's style, using the reference's
    /// own versification to decide which books are one chapter long.
    pub fn format(&self, bref: &BibleRef) -> Result<String> {
        let mut parts = Vec::with_capacity(bref.refs.len());
        for sref in &bref.refs {
            parts.push(format_simple(
                self.style(),
                Some(bref.versification()),
                sref,
            )?);
        }
        Ok(parts.join(&self.style().book_separator))
    }

    /// Format a single-book reference in this parser's style.
    pub fn format_ref(&self, sref: &SimpleBibleRef) -> Result<String> {
        format_simple(self.style(), Some(self.versification()), sref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use versiref_style::standard_style;
    use versiref_types::BookId;

    fn sbl() -> RefStyle {
        standard_style("en-sbl").unwrap()
    }

    fn eng() -> Versification {
        Versification::standard("eng").unwrap()
    }

    #[test]
    fn test_format_single_verse() {
        let sref = SimpleBibleRef::for_range(BookId::Jhn, 3, 16, 16);
        assert_eq!(format_simple(&sbl(), None, &sref).unwrap(), "John 3:16");
    }

    #[test]
    fn test_format_verse_range() {
        let sref = SimpleBibleRef::for_range(BookId::Mat, 5, 3, 12);
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "Matt 5:3\u{2013}12"
        );
    }

    #[test]
    fn test_format_elides_repeated_chapter() {
        let sref = SimpleBibleRef::new(
            BookId::Mrk,
            vec![VerseRange::verses(4, 3, 9), VerseRange::verses(4, 13, 20)],
        );
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "Mark 4:3\u{2013}9, 13\u{2013}20"
        );
    }

    #[test]
    fn test_format_without_elision_restates_chapter() {
        let style = sbl().with_chapter_elision(false);
        let sref = SimpleBibleRef::new(
            BookId::Mrk,
            vec![VerseRange::verses(4, 3, 9), VerseRange::verses(4, 13, 20)],
        );
        assert_eq!(
            format_simple(&style, None, &sref).unwrap(),
            "Mark 4:3\u{2013}9; 4:13\u{2013}20"
        );
    }

    #[test]
    fn test_format_new_chapter_restates_chapter() {
        let sref = SimpleBibleRef::new(
            BookId::Act,
            vec![VerseRange::verses(1, 8, 11), VerseRange::verses(2, 1, 4)],
        );
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "Acts 1:8\u{2013}11; 2:1\u{2013}4"
        );
    }

    #[test]
    fn test_format_cross_chapter_range() {
        let sref = SimpleBibleRef::new(BookId::Luk, vec![VerseRange::new(23, 50, 24, 12)]);
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "Luke 23:50\u{2013}24:12"
        );
    }

    #[test]
    fn test_format_whole_book_and_chapters() {
        let sref = SimpleBibleRef::whole_book(BookId::Jhn);
        assert_eq!(format_simple(&sbl(), None, &sref).unwrap(), "John");
        let sref = SimpleBibleRef::new(BookId::Jhn, vec![VerseRange::whole_chapters(3, 4)]);
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "John 3\u{2013}4"
        );
    }

    #[test]
    fn test_format_open_ended_range() {
        let sref = SimpleBibleRef::new(BookId::Rom, vec![VerseRange::following(1, 16)]);
        assert_eq!(format_simple(&sbl(), None, &sref).unwrap(), "Rom 1:16ff");
    }

    #[test]
    fn test_format_subverses() {
        let sref = SimpleBibleRef::new(
            BookId::Gen,
            vec![VerseRange {
                start_chapter: "1".to_owned(),
                start_verse: 1,
                start_subverse: "a".to_owned(),
                end_chapter: "1".to_owned(),
                end_verse: 1,
                end_subverse: "c".to_owned(),
                original_text: None,
            }],
        );
        assert_eq!(
            format_simple(&sbl(), None, &sref).unwrap(),
            "Gen 1:1a\u{2013}c"
        );
    }

    #[test]
    fn test_format_single_chapter_book_with_versification() {
        let sref = SimpleBibleRef::for_range(BookId::Jud, 1, 5, 5);
        let eng = eng();
        assert_eq!(
            format_simple(&sbl(), Some(&eng), &sref).unwrap(),
            "Jude 5"
        );
        assert_eq!(format_simple(&sbl(), None, &sref).unwrap(), "Jude 1:5");
    }

    #[test]
    fn test_format_unknown_book_name() {
        let style = standard_style("it-cei").unwrap();
        let sref = SimpleBibleRef::whole_book(BookId::Ma3);
        assert!(matches!(
            format_simple(&style, None, &sref),
            Err(Error::UnknownBookName { book: BookId::Ma3 })
        ));
    }

    #[test]
    fn test_parser_format_joins_books() {
        let parser = RefParser::new(Arc::new(sbl()), Arc::new(eng()));
        let bref = parser.parse("Matt 5:3; Mark 4:3").unwrap();
        assert_eq!(parser.format(&bref).unwrap(), "Matt 5:3; Mark 4:3");
    }
}
