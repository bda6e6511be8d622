//! Embedded standard book-name sets.
//!
//! Each set is a JSON object mapping canonical book codes to names, e.g.
//! `{ "GEN": "Gen", "EXO": "Exod", ... }`. Sets are named after the
//! publication convention they come from, such as `en-sbl_abbreviations`.

use crate::error::{Error, Result};
use rust_embed::Embed;
use std::collections::BTreeMap;
use versiref_types::BookId;

/// Embedded name sets from the data/book_names/ directory.
#[derive(Embed)]
#[folder = "data/book_names/"]
#[include = "*.json"]
struct StandardNameSets;

/// Load an embedded standard name set.
///
/// The returned table is the caller's to modify, so a style can customize
/// individual names (e.g. `names.insert(BookId::Sng, "Cant".to_owned())`)
/// without affecting other callers.
pub fn standard_names(id: &str) -> Result<BTreeMap<BookId, String>> {
    let filename = format!("{id}.json");
    let file = StandardNameSets::get(&filename).ok_or_else(|| Error::UnknownNameSet {
        id: id.to_owned(),
    })?;
    tracing::debug!(id, "loading standard book names");
    let raw: BTreeMap<String, String> = serde_json::from_str(&String::from_utf8_lossy(&file.data))?;
    let mut names = BTreeMap::new();
    for (code, name) in raw {
        names.insert(code.parse::<BookId>()?, name);
    }
    Ok(names)
}

/// The identifiers of all embedded standard name sets.
pub fn standard_name_ids() -> Vec<String> {
    let mut ids: Vec<String> = StandardNameSets::iter()
        .filter_map(|path| path.strip_suffix(".json").map(str::to_owned))
        .collect();
    ids.sort();
    ids
}
