//! Citation styles for Bible references.
//!
//! A [`RefStyle`] captures one publication's conventions: which name or
//! abbreviation each book is written as, which names are recognized when
//! parsing, and the separator strings between chapters, verses, and
//! ranges. Standard name sets and styles are embedded in the crate.
//!
//! ```
//! use versiref_style::standard_style;
//! use versiref_types::BookId;
//!
//! let style = standard_style("en-sbl")?;
//! assert_eq!(style.name(BookId::Rom), Some("Rom"));
//! assert_eq!(style.resolve_name("Romans"), Some(BookId::Rom));
//! # Ok::<(), versiref_style::Error>(())
//! ```

mod error;
mod names;
mod registry;
mod style;

pub use error::{Error, Result};
pub use names::{standard_name_ids, standard_names};
pub use registry::{standard_style, standard_style_ids};
pub use style::{NameForm, RefStyle};
