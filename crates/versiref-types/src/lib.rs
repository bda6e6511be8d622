//! Canonical book identifiers and naive Bible reference value types.
//!
//! This crate holds the value types shared by the rest of the versiref
//! workspace:
//!
//! - [`BookId`]: the fixed enumeration of canonical (Paratext) three-letter
//!   book codes.
//! - [`VerseRange`]: a start/end chapter-verse-subverse pair within one book.
//! - [`SimpleBibleRef`]: an ordered sequence of verse ranges scoped to one
//!   book.
//!
//! These types are "naive": they carry no versification system. Anything
//! that needs chapter/verse validity takes an explicit source of limits via
//! the [`ChapterVerseLimits`] trait, implemented by `Versification` in the
//! versiref-versification crate. Keeping the two tiers separate means code
//! that must not assume a specific versification cannot accidentally do so.

pub mod book;
pub mod limits;
pub mod range;
pub mod simple_ref;

pub use book::{BookId, UnknownBookCode};
pub use limits::ChapterVerseLimits;
pub use range::VerseRange;
pub use simple_ref::SimpleBibleRef;
