//! Parsing, formatting, scanning, and converting Bible references.
//!
//! A [`RefParser`] combines a citation style with a versification and
//! turns text into structured references and back:
//!
//! ```
//! use std::sync::Arc;
//! use versiref::{RefParser, Versification, standard_style};
//!
//! let parser = RefParser::new(
//!     Arc::new(standard_style("en-sbl")?),
//!     Arc::new(Versification::standard("eng")?),
//! );
//! let bref = parser.parse("John 3:16")?;
//! assert_eq!(parser.format(&bref)?, "John 3:16");
//! # Ok::<(), versiref::Error>(())
//! ```
//!
//! The building blocks live in their own crates and are re-exported
//! here: book identifiers and naive reference types, versification
//! tables with the mapping engine, and citation styles with their
//! embedded name sets.

mod error;
mod format;
mod matcher;
mod parser;
mod scan;

pub use error::{Error, Result};
pub use format::format_simple;
pub use parser::{ParseOptions, RefParser};
pub use scan::{ScanMatch, ScanOptions, Scanner};

pub use versiref_style::{standard_names, standard_style, NameForm, RefStyle};
pub use versiref_types::{BookId, ChapterVerseLimits, SimpleBibleRef, VerseRange};
pub use versiref_versification::{BibleRef, MappedRange, Versification};
