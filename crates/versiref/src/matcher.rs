//! Book-name recognition.

use versiref_style::RefStyle;
use versiref_types::BookId;

/// A compiled table of every name the style recognizes.
///
/// Matching is ASCII-case-insensitive and leftmost-longest; when two
/// names of equal length match at the same position, the one written
/// exactly as in the style wins.
#[derive(Debug)]
pub(crate) struct NameMatcher {
    /// Recognized names, longest first.
    names: Vec<(String, BookId)>,
}

impl NameMatcher {
    pub(crate) fn new(style: &RefStyle) -> NameMatcher {
        let mut names: Vec<(String, BookId)> = style
            .recognized_names()
            .map(|(name, book)| (name.to_owned(), book))
            .collect();
        names.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        NameMatcher { names }
    }

    /// Match a book name at a byte position, returning the book and the
    /// matched length. The character after the name must not be
    /// alphanumeric, so a name never matches inside a longer word.
    pub(crate) fn match_at(&self, text: &str, pos: usize) -> Option<(BookId, usize)> {
        let rest = &text[pos..];
        let mut best: Option<(BookId, usize, bool)> = None;
        for (name, book) in &self.names {
            if let Some((_, len, _)) = best {
                if name.len() < len {
                    break;
                }
            }
            let Some(candidate) = rest.get(..name.len()) else {
                continue;
            };
            if !candidate.eq_ignore_ascii_case(name) {
                continue;
            }
            if rest[name.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric)
            {
                continue;
            }
            let exact = candidate == name;
            match best {
                Some((_, len, best_exact)) if name.len() == len && (best_exact || !exact) => {}
                _ => best = Some((*book, name.len(), exact)),
            }
        }
        best.map(|(book, len, _)| (book, len))
    }
}
