//! Loading versification tables from JSON data.
//!
//! The on-disk shape mirrors the Paratext-derived data the tables come
//! from: per-book arrays of last-verse numbers, excluded verses as
//! `"BOOK C:V"` strings, and mapping entries as source/target location
//! strings relative to the baseline system.

use crate::error::{Error, Result};
use crate::location::{MappingEntry, MappingTarget, VerseLocation};
use crate::versification::Versification;
use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashMap;
use versiref_types::BookId;

/// Embedded standard versification tables from the data/ directory.
#[derive(Embed)]
#[folder = "data/"]
#[include = "*.json"]
struct StandardTables;

/// The serde shape of a versification JSON document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VersificationData {
    /// Identifier of the system (e.g. `"eng"`).
    pub id: String,
    /// Per-book arrays whose `n`-th element is the last verse of chapter
    /// `n + 1`.
    pub max_verses: HashMap<BookId, Vec<i32>>,
    /// Verses textually absent from this system, as `"BOOK C:V"` strings.
    #[serde(default)]
    pub excluded_verses: Vec<String>,
    /// Mapping entries relative to the baseline system.
    #[serde(default)]
    pub mappings: Vec<MappingData>,
}

/// One mapping entry in data form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingData {
    /// Baseline-system location, `"BOOK C:V[sub]"`.
    pub source: String,
    /// Location or contiguous range in this system,
    /// `"BOOK C:V[sub][-[C:]V[sub]]"`.
    pub target: String,
}

impl Versification {
    /// Build a versification from already-deserialized data.
    pub fn from_data(data: VersificationData) -> Result<Versification> {
        let mut versification = Versification::new(data.id, data.max_verses);
        for text in &data.excluded_verses {
            let location: VerseLocation = text.parse()?;
            if location.verse < 1 {
                return Err(Error::MalformedLocation { text: text.clone() });
            }
            versification = versification.with_excluded_verse(
                location.book,
                location.chapter,
                location.verse as u32,
            );
        }
        for mapping in &data.mappings {
            let source: VerseLocation = mapping.source.parse()?;
            let target: MappingTarget = mapping.target.parse()?;
            versification = versification.with_mapping(MappingEntry { source, target });
        }
        Ok(versification)
    }

    /// Parse a versification from its JSON representation.
    pub fn from_json(json: &str) -> Result<Versification> {
        let data: VersificationData = serde_json::from_str(json)?;
        Versification::from_data(data)
    }

    /// Construct one of the embedded standard versifications.
    ///
    /// The identifier is lowercased to find the table, so `"eng"` and
    /// `"ENG"` load the same data.
    pub fn standard(id: &str) -> Result<Versification> {
        let filename = format!("{}.json", id.to_lowercase());
        let file = StandardTables::get(&filename).ok_or_else(|| Error::UnknownVersification {
            id: id.to_owned(),
        })?;
        tracing::debug!(id, "loading standard versification");
        Versification::from_json(&String::from_utf8_lossy(&file.data))
    }

    /// The identifiers of all embedded standard versifications.
    pub fn standard_ids() -> Vec<String> {
        let mut ids: Vec<String> = StandardTables::iter()
            .filter_map(|path| path.strip_suffix(".json").map(str::to_owned))
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let v = Versification::from_json(
            r#"{
                "id": "mini",
                "maxVerses": { "GEN": [31, 25], "JUD": [25] },
                "excludedVerses": ["GEN 2:10"],
                "mappings": [{ "source": "GEN 1:5", "target": "GEN 1:5-6" }]
            }"#,
        )
        .unwrap();
        assert_eq!(v.id(), "mini");
        assert_eq!(v.last_verse(BookId::Gen, 1), 31);
        assert!(!v.is_valid(BookId::Gen, 2, 10));
        assert!(v.is_single_chapter(BookId::Jud));
    }

    #[test]
    fn test_from_json_rejects_bad_book() {
        let result = Versification::from_json(r#"{ "id": "x", "maxVerses": { "XYZ": [1] } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_mapping() {
        let result = Versification::from_json(
            r#"{
                "id": "x",
                "maxVerses": { "GEN": [31] },
                "mappings": [{ "source": "GEN 1", "target": "GEN 1:1" }]
            }"#,
        );
        assert!(matches!(result, Err(Error::MalformedLocation { .. })));
    }

    #[test]
    fn test_unknown_standard() {
        assert!(matches!(
            Versification::standard("nonexistent"),
            Err(Error::UnknownVersification { .. })
        ));
    }

    #[test]
    fn test_standard_ids() {
        let ids = Versification::standard_ids();
        assert!(ids.contains(&"org".to_owned()));
        assert!(ids.contains(&"eng".to_owned()));
    }
}
