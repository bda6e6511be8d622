//! Tests for the embedded standard versifications.

use std::sync::Arc;
use versiref_types::{BookId, SimpleBibleRef, VerseRange};
use versiref_versification::{BibleRef, Versification};

fn eng() -> Arc<Versification> {
    Arc::new(Versification::standard("eng").unwrap())
}

fn org() -> Arc<Versification> {
    Arc::new(Versification::standard("org").unwrap())
}

#[test]
fn test_eng_verse_counts() {
    let eng = eng();
    assert_eq!(eng.last_verse(BookId::Gen, 1), 31);
    assert_eq!(eng.last_verse(BookId::Gen, 3), 24);
    assert_eq!(eng.last_verse(BookId::Psa, 119), 176);
    assert_eq!(eng.last_verse(BookId::Jhn, 3), 36);
    assert_eq!(eng.last_verse(BookId::Rev, 22), 21);
}

#[test]
fn test_unknown_book_or_chapter_is_negative() {
    let eng = eng();
    assert_eq!(eng.last_verse(BookId::Tob, 1), -1);
    assert_eq!(eng.last_verse(BookId::Gen, 51), -1);
    assert_eq!(eng.last_verse(BookId::Gen, 0), -1);
}

#[test]
fn test_single_chapter_books() {
    let eng = eng();
    for book in [BookId::Oba, BookId::Phm, BookId::Jn2, BookId::Jn3, BookId::Jud] {
        assert!(eng.is_single_chapter(book), "{book} should be one chapter");
    }
    assert!(!eng.is_single_chapter(BookId::Jhn));
}

#[test]
fn test_org_and_eng_differ_in_joel_and_malachi() {
    let org = org();
    let eng = eng();
    assert_eq!(org.chapter_count(BookId::Jol), 4);
    assert_eq!(eng.chapter_count(BookId::Jol), 3);
    assert_eq!(org.chapter_count(BookId::Mal), 3);
    assert_eq!(eng.chapter_count(BookId::Mal), 4);
    assert_eq!(org.last_verse(BookId::Mal, 3), 24);
    assert_eq!(eng.last_verse(BookId::Mal, 3), 18);
}

#[test]
fn test_convert_malachi_to_eng() {
    let bref = BibleRef::new(
        org(),
        vec![SimpleBibleRef::for_range(BookId::Mal, 3, 19, 24)],
    );
    let converted = bref.convert_to(&eng()).unwrap();
    assert_eq!(
        converted.refs,
        vec![SimpleBibleRef::new(
            BookId::Mal,
            vec![VerseRange::verses(4, 1, 6)]
        )]
    );
}

#[test]
fn test_convert_malachi_back_to_org() {
    let bref = BibleRef::new(
        eng(),
        vec![SimpleBibleRef::for_range(BookId::Mal, 4, 1, 6)],
    );
    let converted = bref.convert_to(&org()).unwrap();
    assert_eq!(
        converted.refs,
        vec![SimpleBibleRef::new(
            BookId::Mal,
            vec![VerseRange::verses(3, 19, 24)]
        )]
    );
}

#[test]
fn test_convert_joel_spirit_passage() {
    // The baseline's Joel 3 is the tail of Joel 2 in English Bibles.
    let bref = BibleRef::new(
        org(),
        vec![SimpleBibleRef::for_range(BookId::Jol, 3, 1, 5)],
    );
    let converted = bref.convert_to(&eng()).unwrap();
    assert_eq!(
        converted.refs,
        vec![SimpleBibleRef::new(
            BookId::Jol,
            vec![VerseRange::verses(2, 28, 32)]
        )]
    );
}

#[test]
fn test_convert_unmapped_locations_pass_through() {
    let bref = BibleRef::new(
        org(),
        vec![SimpleBibleRef::for_range(BookId::Gen, 1, 1, 31)],
    );
    let converted = bref.convert_to(&eng()).unwrap();
    assert_eq!(
        converted.refs,
        vec![SimpleBibleRef::new(
            BookId::Gen,
            vec![VerseRange::verses(1, 1, 31)]
        )]
    );
}

#[test]
fn test_validity_against_standard_table() {
    let eng = eng();
    assert!(eng.is_valid(BookId::Jhn, 3, 16));
    assert!(!eng.is_valid(BookId::Jhn, 3, 37));
    assert!(!eng.is_valid(BookId::Jhn, 22, 1));
    assert!(!eng.is_valid(BookId::Jhn, 3, 0));
}

#[test]
fn test_round_trip_conversion_is_identity() {
    let org = org();
    let eng = eng();
    let bref = BibleRef::new(
        Arc::clone(&org),
        vec![
            SimpleBibleRef::for_range(BookId::Jol, 4, 1, 21),
            SimpleBibleRef::for_range(BookId::Psa, 23, 1, 6),
        ],
    );
    let there = bref.convert_to(&eng).unwrap();
    let back = there.convert_to(&org).unwrap();
    assert_eq!(back, bref);
}
