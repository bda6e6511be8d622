//! Versification tables and cross-system location mapping.
//!
//! A [`Versification`] is an immutable table describing how one textual
//! tradition divides the books of the Bible into chapters and verses: the
//! last valid verse of every chapter, the verses that are textually absent
//! ("excluded"), and a set of directed mapping entries that relate this
//! system's coordinates to a fixed baseline system (`org`).
//!
//! The mapping engine converts locations and ranges between systems. Most
//! chapter/verse numbers align 1:1 across systems, so the absence of a
//! mapping entry means "no adjustment needed", not "invalid"; where source
//! data is known to be bad (a mapping target beyond the chapter's last
//! verse), the engine refuses to apply it and reports the location as
//! unmapped instead.
//!
//! # Example
//!
//! ```rust
//! use versiref_versification::Versification;
//! use versiref_types::BookId;
//!
//! let eng = Versification::standard("eng").unwrap();
//! assert_eq!(eng.last_verse(BookId::Gen, 1), 31);
//! assert!(eng.is_valid(BookId::Jhn, 3, 16));
//! assert_eq!(eng.last_verse(BookId::Gen, 99), -1);
//! ```

pub mod bible_ref;
pub mod error;
pub mod loader;
pub mod location;
pub mod mapping;
pub mod versification;

pub use bible_ref::BibleRef;
pub use error::{Error, Result};
pub use loader::{MappingData, VersificationData};
pub use location::{MappingEntry, MappingTarget, VerseLocation};
pub use mapping::MappedRange;
pub use versification::Versification;
