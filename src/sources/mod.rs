/*! Fact-check sources.

Each source ships its own raw schema (headerless LIAR TSV dumps, headered
scrape CSVs from PolitiFact and Snopes). The submodules hold one typed
loader per source and project its records onto [CanonicalRecord], the common
`{label, statement, source}` shape everything downstream consumes.

Sources form a closed set: [Source] is an enum, so a new source is a new
variant and the compiler points at every match that needs updating.
!*/

pub mod liar;
pub mod politifact;
pub mod snopes;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provenance tag of a corpus record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "LIAR")]
    Liar,
    #[serde(rename = "PolitiFact")]
    PolitiFact,
    #[serde(rename = "Snopes")]
    Snopes,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Liar => "LIAR",
            Source::PolitiFact => "PolitiFact",
            Source::Snopes => "Snopes",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reconciled record: non-null label and statement (empty allowed),
/// tagged with its provenance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub label: String,
    pub statement: String,
    pub source: Source,
}
