//! Canonical book identifiers.
//!
//! Books are identified by Paratext three-letter codes ("GEN", "JHN", ...).
//! The enumeration covers the protocanonical books plus the deuterocanonical
//! books and the split-out ids used by some versifications (e.g. `PSAS` for
//! Psalm superscriptions, `ESG` for Greek Esther).

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a recognized book code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown book code '{code}'")]
pub struct UnknownBookCode {
    /// The offending code text.
    pub code: String,
}

macro_rules! book_ids {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// A canonical book identifier (Paratext three-letter code).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BookId {
            $($variant),+
        }

        impl BookId {
            /// All known book ids, in canonical order.
            pub const ALL: &'static [BookId] = &[$(BookId::$variant),+];

            /// The Paratext code for this book.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(BookId::$variant => $code),+
                }
            }

            /// Look up a book id by its Paratext code. Case-sensitive.
            pub fn from_code(code: &str) -> Option<BookId> {
                match code {
                    $($code => Some(BookId::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

book_ids! {
    Gen => "GEN", Exo => "EXO", Lev => "LEV", Num => "NUM", Deu => "DEU",
    Jos => "JOS", Jdg => "JDG", Rut => "RUT", Sa1 => "1SA", Sa2 => "2SA",
    Ki1 => "1KI", Ki2 => "2KI", Ch1 => "1CH", Ch2 => "2CH", Ezr => "EZR",
    Neh => "NEH", Est => "EST", Job => "JOB", Psa => "PSA", Pro => "PRO",
    Ecc => "ECC", Sng => "SNG", Isa => "ISA", Jer => "JER", Lam => "LAM",
    Ezk => "EZK", Dan => "DAN", Hos => "HOS", Jol => "JOL", Amo => "AMO",
    Oba => "OBA", Jon => "JON", Mic => "MIC", Nam => "NAM", Hab => "HAB",
    Zep => "ZEP", Hag => "HAG", Zec => "ZEC", Mal => "MAL",
    Mat => "MAT", Mrk => "MRK", Luk => "LUK", Jhn => "JHN", Act => "ACT",
    Rom => "ROM", Co1 => "1CO", Co2 => "2CO", Gal => "GAL", Eph => "EPH",
    Php => "PHP", Col => "COL", Th1 => "1TH", Th2 => "2TH", Ti1 => "1TI",
    Ti2 => "2TI", Tit => "TIT", Phm => "PHM", Heb => "HEB", Jas => "JAS",
    Pe1 => "1PE", Pe2 => "2PE", Jn1 => "1JN", Jn2 => "2JN", Jn3 => "3JN",
    Jud => "JUD", Rev => "REV",
    Tob => "TOB", Jdt => "JDT", Esg => "ESG", Wis => "WIS", Sir => "SIR",
    Bar => "BAR", Lje => "LJE", S3y => "S3Y", Sus => "SUS", Bel => "BEL",
    Ma1 => "1MA", Ma2 => "2MA", Ma3 => "3MA", Ma4 => "4MA",
    Man => "MAN", Psas => "PSAS",
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookId {
    type Err = UnknownBookCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookId::from_code(s).ok_or_else(|| UnknownBookCode {
            code: s.to_owned(),
        })
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct BookIdVisitor;

impl Visitor<'_> for BookIdVisitor {
    type Value = BookId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Paratext book code such as \"GEN\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<BookId, E> {
        BookId::from_code(value)
            .ok_or_else(|| E::custom(format!("unknown book code '{}'", value)))
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BookIdVisitor)
    }
}
