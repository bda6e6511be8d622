//! Scanning running text for references.

use crate::parser::{Cursor, RefParser};
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;
use versiref_types::SimpleBibleRef;
use versiref_versification::BibleRef;

/// Options for [`RefParser::scan_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Yield one match per verse range instead of one per reference, so
    /// "Mark 4:3-9, 13-20" produces two items with their own spans.
    pub as_ranges: bool,
}

/// One reference found in scanned text.
#[derive(Debug, Clone)]
pub struct ScanMatch {
    /// The parsed reference.
    pub reference: BibleRef,
    /// Byte span of the matched text.
    pub span: Range<usize>,
}

/// Lazy iterator over the references in a text.
///
/// Matches are non-overlapping and yielded in text order, leftmost and
/// longest first. Text that parses but names a location outside the
/// versification is not a match; scanning never fails.
pub struct Scanner<'p, 't> {
    parser: &'p RefParser,
    text: &'t str,
    pos: usize,
    as_ranges: bool,
    pending: VecDeque<ScanMatch>,
}

impl Iterator for Scanner<'_, '_> {
    type Item = ScanMatch;

    fn next(&mut self) -> Option<ScanMatch> {
        if let Some(found) = self.pending.pop_front() {
            return Some(found);
        }
        while self.pos < self.text.len() {
            let candidate = self.pos;
            let first = self.text[candidate..].chars().next()?;
            self.pos = candidate + first.len_utf8();
            // Book names start on a word boundary.
            let boundary = !self.text[..candidate]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
            if !boundary || !first.is_alphanumeric() {
                continue;
            }
            let mut cursor = Cursor::new(self.text, candidate);
            let Some(parsed) = self.parser.reference(&mut cursor) else {
                continue;
            };
            if !self.parser.is_parsed_ref_valid(&parsed) {
                continue;
            }
            let span = parsed.span;
            self.pos = span.1;
            let sref = self.parser.materialize(self.text, parsed);
            if self.as_ranges {
                self.queue_ranges(sref, span);
                if let Some(found) = self.pending.pop_front() {
                    return Some(found);
                }
            } else {
                return Some(ScanMatch {
                    reference: self.wrap(vec![sref]),
                    span: span.0..span.1,
                });
            }
        }
        None
    }
}

impl Scanner<'_, '_> {
    fn wrap(&self, refs: Vec<SimpleBibleRef>) -> BibleRef {
        BibleRef::new(Arc::clone(self.parser.versification()), refs)
    }

    /// Split a matched reference into one item per range, locating each
    /// range's text within the matched span.
    fn queue_ranges(&mut self, sref: SimpleBibleRef, span: (usize, usize)) {
        let matched = &self.text[span.0..span.1];
        let mut search_from = 0;
        for single in sref.ranges_iter() {
            let Some(fragment) = single.original_text.clone() else {
                continue;
            };
            let Some(found) = matched[search_from..].find(&fragment) else {
                continue;
            };
            let start = span.0 + search_from + found;
            let end = start + fragment.len();
            search_from += found + fragment.len();
            let reference = self.wrap(vec![single]);
            self.pending.push_back(ScanMatch {
                reference,
                span: start..end,
            });
        }
    }
}

impl RefParser {
    /// Scan a text for references.
    pub fn scan<'p, 't>(&'p self, text: &'t str) -> Scanner<'p, 't> {
        self.scan_with(text, ScanOptions::default())
    }

    /// Scan a text for references, with options.
    pub fn scan_with<'p, 't>(&'p self, text: &'t str, options: ScanOptions) -> Scanner<'p, 't> {
        Scanner {
            parser: self,
            text,
            pos: 0,
            as_ranges: options.as_ranges,
            pending: VecDeque::new(),
        }
    }

    /// Rewrite every reference in a text, passing everything else
    /// through unchanged.
    pub fn transform(&self, text: &str, mut render: impl FnMut(&BibleRef) -> String) -> String {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for found in self.scan(text) {
            result.push_str(&text[last..found.span.start]);
            result.push_str(&render(&found.reference));
            last = found.span.end;
        }
        result.push_str(&text[last..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_simple;
    use versiref_style::{standard_names, standard_style, RefStyle};
    use versiref_versification::Versification;

    fn parser() -> RefParser {
        RefParser::new(
            Arc::new(standard_style("en-sbl").unwrap()),
            Arc::new(Versification::standard("eng").unwrap()),
        )
    }

    fn formatted(parser: &RefParser, found: &ScanMatch) -> String {
        parser.format(&found.reference).unwrap()
    }

    #[test]
    fn test_scan_finds_references_in_order() {
        let parser = parser();
        let text = "Look at John 3:16 and Rom 8:28-30 for encouragement. Also Matt 5:3-12.";
        let found: Vec<ScanMatch> = parser.scan(text).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(formatted(&parser, &found[0]), "John 3:16");
        assert_eq!(formatted(&parser, &found[1]), "Rom 8:28\u{2013}30");
        assert_eq!(formatted(&parser, &found[2]), "Matt 5:3\u{2013}12");
        for item in &found {
            let sref = &item.reference.refs[0];
            assert_eq!(sref.original_text.as_deref(), Some(&text[item.span.clone()]));
        }
    }

    #[test]
    fn test_scan_as_ranges_splits_matches() {
        let parser = parser();
        let text = "See Mark 4:3\u{2013}9,13\u{2013}20 and Acts 1:8\u{2013}11; 2:1\u{2013}4";
        let options = ScanOptions { as_ranges: true };
        let found: Vec<ScanMatch> = parser.scan_with(text, options).collect();
        assert_eq!(found.len(), 4);
        assert_eq!(formatted(&parser, &found[0]), "Mark 4:3\u{2013}9");
        assert_eq!(formatted(&parser, &found[1]), "Mark 4:13\u{2013}20");
        assert_eq!(formatted(&parser, &found[2]), "Acts 1:8\u{2013}11");
        assert_eq!(formatted(&parser, &found[3]), "Acts 2:1\u{2013}4");
        for item in &found {
            assert_eq!(
                item.reference.refs[0].original_text.as_deref(),
                Some(&text[item.span.clone()])
            );
        }
    }

    #[test]
    fn test_scan_ignores_noise() {
        let full_names = RefStyle::new(standard_names("en-sbl_names").unwrap()).unwrap();
        let parser = RefParser::new(
            Arc::new(full_names),
            Arc::new(Versification::standard("eng").unwrap()),
        );
        let abbrevs = standard_style("en-sbl").unwrap();
        let text = "\n    Chapter 1\n    As we read in John 3:16, God loved the world.\n    The price was $3:16 at the store.\n    Romans 8:28 teaches us about God's purpose.\n    ";
        let found: Vec<ScanMatch> = parser.scan(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(
            format_simple(&abbrevs, None, &found[0].reference.refs[0]).unwrap(),
            "John 3:16"
        );
        assert_eq!(
            format_simple(&abbrevs, None, &found[1].reference.refs[0]).unwrap(),
            "Rom 8:28"
        );
    }

    #[test]
    fn test_scan_spans_with_alias() {
        let style = standard_style("en-sbl")
            .unwrap()
            .with_recognized_name("Jn", versiref_types::BookId::Jhn)
            .unwrap();
        let parser = RefParser::new(
            Arc::new(style),
            Arc::new(Versification::standard("eng").unwrap()),
        );
        let text = "See Jn 3:16 and Rom 8:28.";
        let found: Vec<ScanMatch> = parser.scan(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(&text[found[0].span.clone()], "Jn 3:16");
        assert_eq!(&text[found[1].span.clone()], "Rom 8:28");
    }

    #[test]
    fn test_scan_skips_invalid_references() {
        let parser = parser();
        let text = "John 99:1 is wrong but John 3:16 is real.";
        let found: Vec<ScanMatch> = parser.scan(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].span.clone()], "John 3:16");
    }

    #[test]
    fn test_scan_separate_books_are_separate_matches() {
        let parser = parser();
        let text = "Compare Matt 5:3; Mark 4:3 here.";
        let found: Vec<ScanMatch> = parser.scan(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(&text[found[0].span.clone()], "Matt 5:3");
        assert_eq!(&text[found[1].span.clone()], "Mark 4:3");
    }

    #[test]
    fn test_transform() {
        let sbl = parser();
        let cei = RefParser::new(
            Arc::new(standard_style("it-cei").unwrap()),
            Arc::new(Versification::standard("eng").unwrap()),
        );
        let text = "Read John 3:16 today.";
        let rewritten = sbl.transform(text, |bref| {
            cei.format(bref).unwrap_or_default()
        });
        assert_eq!(rewritten, "Read Gv 3,16 today.");
    }

    #[test]
    fn test_scan_skips_oversized_verse_numbers() {
        let parser = parser();
        assert_eq!(parser.scan("see Matt 5:2147483647f end").count(), 0);
        assert_eq!(parser.scan("Gen 1:4294967295 etc").count(), 0);
    }

    #[test]
    fn test_scan_empty_text() {
        let parser = parser();
        assert_eq!(parser.scan("").count(), 0);
        assert_eq!(parser.scan("no references here").count(), 0);
    }
}
