//! Registry of named standard styles.

use crate::error::{Error, Result};
use crate::names::standard_names;
use crate::style::{NameForm, RefStyle};

/// Build one of the registered standard styles.
///
/// - `en-sbl` — SBL handbook abbreviations ("Gen", "1 Cor"), colon
///   chapter-verse separator, en-dash ranges. Full names are recognized
///   when parsing but abbreviations are used to format.
/// - `en-sbl-full` — the same tables, formatting with full names.
/// - `it-cei` — CEI abbreviations ("Gen", "1Cor"), comma chapter-verse
///   separator, period verse separator, hyphen ranges, "s"/"ss" suffixes.
pub fn standard_style(id: &str) -> Result<RefStyle> {
    tracing::debug!(id, "building standard reference style");
    match id {
        "en-sbl" => RefStyle::new(standard_names("en-sbl_abbreviations")?)?
            .with_full_names(standard_names("en-sbl_names")?),
        "en-sbl-full" => Ok(standard_style("en-sbl")?.with_default_form(NameForm::Full)),
        "it-cei" => Ok(RefStyle::new(standard_names("it-cei_abbreviazioni")?)?
            .with_chapter_verse_separator(",")
            .with_verse_separator(".")
            .with_range_separator("-")
            .with_following("s", "ss")),
        _ => Err(Error::UnknownStyle { id: id.to_owned() }),
    }
}

/// The identifiers accepted by [`standard_style`].
pub fn standard_style_ids() -> &'static [&'static str] {
    &["en-sbl", "en-sbl-full", "it-cei"]
}
