//! Versification-aware references.

use crate::error::{Error, Result};
use crate::versification::Versification;
use std::sync::Arc;
use versiref_types::SimpleBibleRef;

/// An ordered sequence of per-book references sharing one versification.
///
/// The versification is shared, not owned: many references typically point
/// at one process-lifetime table. Equality compares the versification by id
/// and ignores provenance text, so a parsed reference and its re-parsed
/// formatting compare equal.
#[derive(Debug, Clone)]
pub struct BibleRef {
    versification: Arc<Versification>,
    /// The per-book references, in citation order.
    pub refs: Vec<SimpleBibleRef>,
}

impl PartialEq for BibleRef {
    fn eq(&self, other: &Self) -> bool {
        self.versification.id() == other.versification.id() && self.refs == other.refs
    }
}

impl Eq for BibleRef {}

impl BibleRef {
    /// Create a reference under the given versification.
    pub fn new(versification: Arc<Versification>, refs: Vec<SimpleBibleRef>) -> Self {
        BibleRef {
            versification,
            refs,
        }
    }

    /// An empty reference under the given versification.
    pub fn empty(versification: Arc<Versification>) -> Self {
        BibleRef::new(versification, Vec::new())
    }

    /// The versification this reference is expressed in.
    pub fn versification(&self) -> &Arc<Versification> {
        &self.versification
    }

    /// True when the reference cites nothing.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Check every contained reference against the versification.
    pub fn is_valid(&self) -> bool {
        self.refs
            .iter()
            .all(|sref| sref.is_valid(&*self.versification))
    }

    /// Express this reference in another versification.
    ///
    /// Every range is mapped through the engine; consecutive ranges that
    /// land in the same book are regrouped into one per-book reference.
    /// Whole-book references carry over unchanged. The first range that
    /// cannot be mapped fails the whole conversion with
    /// [`Error::UnmappedRange`], naming the range so callers can report it.
    pub fn convert_to(&self, target: &Arc<Versification>) -> Result<BibleRef> {
        let mut refs = Vec::new();
        for sref in &self.refs {
            if sref.is_whole_book() {
                refs.push(SimpleBibleRef::whole_book(sref.book_id));
                continue;
            }
            let mut current: Option<SimpleBibleRef> = None;
            for range in &sref.ranges {
                let mapped = self
                    .versification
                    .map_range(target, sref.book_id, range)
                    .ok_or_else(|| Error::UnmappedRange {
                        book: sref.book_id,
                        range: describe_range(range),
                        target: target.id().to_owned(),
                    })?;
                match current.as_mut() {
                    Some(open) if open.book_id == mapped.book => {
                        open.ranges.push(mapped.range);
                    }
                    _ => {
                        if let Some(done) = current.take() {
                            refs.push(done);
                        }
                        current = Some(SimpleBibleRef::new(mapped.book, vec![mapped.range]));
                    }
                }
            }
            if let Some(done) = current.take() {
                refs.push(done);
            }
        }
        Ok(BibleRef::new(Arc::clone(target), refs))
    }
}

fn describe_range(range: &versiref_types::VerseRange) -> String {
    if range.is_whole_chapters() {
        if range.start_chapter == range.end_chapter {
            range.start_chapter.clone()
        } else {
            format!("{}-{}", range.start_chapter, range.end_chapter)
        }
    } else if range.is_single_verse() {
        format!(
            "{}:{}{}",
            range.start_chapter, range.start_verse, range.start_subverse
        )
    } else {
        format!(
            "{}:{}{}-{}:{}{}",
            range.start_chapter,
            range.start_verse,
            range.start_subverse,
            range.end_chapter,
            range.end_verse,
            range.end_subverse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{MappingEntry, MappingTarget, VerseLocation};
    use std::collections::HashMap;
    use versiref_types::{BookId, VerseRange};

    fn org() -> Arc<Versification> {
        let mut max_verses = HashMap::new();
        max_verses.insert(BookId::Mal, vec![14, 17, 24]);
        Arc::new(Versification::new("org", max_verses))
    }

    fn eng() -> Arc<Versification> {
        let mut max_verses = HashMap::new();
        max_verses.insert(BookId::Mal, vec![14, 17, 18, 6]);
        let mut v = Versification::new("eng", max_verses);
        for verse in 19..=24 {
            v = v.with_mapping(MappingEntry {
                source: VerseLocation::new(BookId::Mal, 3, verse),
                target: MappingTarget::Point(VerseLocation::new(BookId::Mal, 4, verse - 18)),
            });
        }
        Arc::new(v)
    }

    #[test]
    fn test_convert_between_systems() {
        let org = org();
        let eng = eng();
        let bref = BibleRef::new(
            Arc::clone(&org),
            vec![SimpleBibleRef::for_range(BookId::Mal, 3, 19, 24)],
        );
        let converted = bref.convert_to(&eng).unwrap();
        assert_eq!(converted.versification().id(), "eng");
        assert_eq!(
            converted.refs,
            vec![SimpleBibleRef::new(
                BookId::Mal,
                vec![VerseRange::verses(4, 1, 6)]
            )]
        );
    }

    #[test]
    fn test_convert_back() {
        let org = org();
        let eng = eng();
        let bref = BibleRef::new(
            Arc::clone(&eng),
            vec![SimpleBibleRef::for_range(BookId::Mal, 4, 1, 6)],
        );
        let converted = bref.convert_to(&org).unwrap();
        assert_eq!(
            converted.refs,
            vec![SimpleBibleRef::new(
                BookId::Mal,
                vec![VerseRange::verses(3, 19, 24)]
            )]
        );
    }

    #[test]
    fn test_convert_whole_book_carries_over() {
        let org = org();
        let eng = eng();
        let bref = BibleRef::new(
            Arc::clone(&org),
            vec![SimpleBibleRef::whole_book(BookId::Mal)],
        );
        let converted = bref.convert_to(&eng).unwrap();
        assert!(converted.refs[0].is_whole_book());
    }

    #[test]
    fn test_equality_by_id_and_content() {
        let org = org();
        let a = BibleRef::new(
            Arc::clone(&org),
            vec![SimpleBibleRef::for_range(BookId::Mal, 3, 1, 2)],
        );
        let b = BibleRef::new(
            Arc::clone(&org),
            vec![
                SimpleBibleRef::for_range(BookId::Mal, 3, 1, 2)
                    .with_original_text("Mal 3:1-2"),
            ],
        );
        assert_eq!(a, b);
    }
}
