//! Concatenation and identifier assignment.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sources::{CanonicalRecord, Source};

/// A canonical record carrying its corpus-wide unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub label: String,
    pub statement: String,
    pub source: Source,
    pub uuid: String,
}

/// Concatenate reconciled sources into a single table, row order preserved
/// within each source and sources kept in the supplied order. Every row gets
/// a fresh random 128-bit identifier; any prior identifier is discarded.
pub fn assemble(sources: Vec<Vec<CanonicalRecord>>) -> Vec<CorpusRecord> {
    sources
        .into_iter()
        .flatten()
        .map(|record| CorpusRecord {
            label: record.label,
            statement: record.statement,
            source: record.source,
            uuid: Uuid::new_v4().to_string(),
        })
        .collect()
}
