//! Snopes scrape CSV loading and reconciliation.
//!
//! Same shape as the PolitiFact loader, but Snopes calls the statement
//! column `claim`.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::normalize::Normalizer;

use super::{CanonicalRecord, Source};

const RATING: &str = "rating";
const CLAIM: &str = "claim";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnopesRecord {
    pub rating: String,
    pub claim: String,
}

/// Read a Snopes scrape CSV, validating `rating` and `claim` against the
/// header row before touching any data row.
pub fn from_path(path: &Path) -> Result<Vec<SnopesRecord>, Error> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let rating_idx = column_index(&headers, RATING)?;
    let claim_idx = column_index(&headers, CLAIM)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(SnopesRecord {
            rating: row.get(rating_idx).unwrap_or_default().to_string(),
            claim: row.get(claim_idx).unwrap_or_default().to_string(),
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
            source: "Snopes",
            column,
        })
}

/// Project onto the canonical schema: `rating` becomes the label, `claim`
/// the (normalized) statement.
pub fn reconcile(records: &[SnopesRecord], normalizer: &Normalizer) -> Vec<CanonicalRecord> {
    records
        .iter()
        .map(|record| CanonicalRecord {
            label: record.rating.clone(),
            statement: normalizer.normalize(&record.claim),
            source: Source::Snopes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::error::Error;
    use crate::normalize::Normalizer;
    use crate::sources::Source;

    use super::*;

    #[test]
    fn test_load_and_reconcile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            "claim,rating,url\n\"The sky is green.\",False,https://example.com\n".as_bytes(),
        )
        .unwrap();

        let records = from_path(file.path()).unwrap();
        assert_eq!(records[0].rating, "False");

        let canonical = reconcile(&records, &Normalizer::default());
        assert_eq!(canonical[0].label, "False");
        assert_eq!(canonical[0].statement, "sky green");
        assert_eq!(canonical[0].source, Source::Snopes);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("rating,url\nFalse,https://example.com\n".as_bytes())
            .unwrap();

        match from_path(file.path()) {
            Err(Error::MissingColumn { source, column }) => {
                assert_eq!(source, "Snopes");
                assert_eq!(column, "claim");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
