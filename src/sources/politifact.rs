//! PolitiFact scrape CSV loading and reconciliation.
//!
//! Headered CSV produced by the PolitiFact scraper. Only `rating` and
//! `statement` survive reconciliation; `rating` becomes the label.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::normalize::Normalizer;

use super::{CanonicalRecord, Source};

const RATING: &str = "rating";
const STATEMENT: &str = "statement";

/// The two columns PolitiFact reconciliation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolitiFactRecord {
    pub rating: String,
    pub statement: String,
}

/// Read a PolitiFact scrape CSV.
///
/// The header row is validated up front: a missing expected column is a
/// fatal [Error::MissingColumn], not a per-row failure. Extra columns are
/// ignored. An empty field falls back to the empty string.
pub fn from_path(path: &Path) -> Result<Vec<PolitiFactRecord>, Error> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let rating_idx = column_index(&headers, RATING)?;
    let statement_idx = column_index(&headers, STATEMENT)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(PolitiFactRecord {
            rating: row.get(rating_idx).unwrap_or_default().to_string(),
            statement: row.get(statement_idx).unwrap_or_default().to_string(),
        });
    }

    info!("{}: {} records", path.display(), records.len());
    Ok(records)
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or(Error::MissingColumn {
            source: "PolitiFact",
            column,
        })
}

/// Project onto the canonical schema, normalizing statements.
pub fn reconcile(records: &[PolitiFactRecord], normalizer: &Normalizer) -> Vec<CanonicalRecord> {
    records
        .iter()
        .map(|record| CanonicalRecord {
            label: record.rating.clone(),
            statement: normalizer.normalize(&record.statement),
            source: Source::PolitiFact,
        })
        .collect()
}
