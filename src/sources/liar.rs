//! LIAR dataset loading and reconciliation.
//!
//! LIAR ships as three headerless TSV files (`train.tsv`, `test.tsv`,
//! `valid.tsv`) with a fixed 14-column schema. Missing values are handled
//! before reconciliation: sparse columns get the `"Unknown"` sentinel,
//! dense ones are forward-filled from the nearest preceding record.
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::cleaning::{CleanedAttributes, CleaningSummary};
use crate::error::Error;
use crate::normalize::Normalizer;

use super::{CanonicalRecord, Source};

/// One row of a LIAR TSV file, columns in file order.
///
/// The count columns are kept as strings: nothing downstream computes on
/// them, and forward-filling does not care.
#[derive(Debug, Clone, Deserialize)]
pub struct LiarRecord {
    pub id: Option<String>,
    pub label: Option<String>,
    pub statement: Option<String>,
    pub subject: Option<String>,
    pub speaker: Option<String>,
    pub job_title: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
    pub barely_true_counts: Option<String>,
    pub false_counts: Option<String>,
    pub half_true_counts: Option<String>,
    pub mostly_true_counts: Option<String>,
    pub pants_on_fire_counts: Option<String>,
    pub context: Option<String>,
}

/// Read a LIAR TSV file. The file carries no header row.
pub fn from_path(path: &Path) -> Result<Vec<LiarRecord>, Error> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;

    let records: Result<Vec<LiarRecord>, csv::Error> = reader.deserialize().collect();
    let records = records?;
    info!("{}: {} records", path.display(), records.len());
    Ok(records)
}

/// Apply the missing-value policy in record order.
///
/// `job_title`, `state` and `context` (mostly-missing columns) fall back to
/// `"Unknown"`. The remaining columns carry forward the nearest preceding
/// non-missing value; a record with no prior value stays missing.
pub fn fill_missing(records: &mut [LiarRecord]) {
    let mut last_subject = None;
    let mut last_speaker = None;
    let mut last_party = None;
    let mut last_barely_true = None;
    let mut last_false = None;
    let mut last_half_true = None;
    let mut last_mostly_true = None;
    let mut last_pants_on_fire = None;

    for record in records.iter_mut() {
        for sparse in [
            &mut record.job_title,
            &mut record.state,
            &mut record.context,
        ] {
            if sparse.is_none() {
                *sparse = Some("Unknown".to_string());
            }
        }

        forward_fill(&mut record.subject, &mut last_subject);
        forward_fill(&mut record.speaker, &mut last_speaker);
        forward_fill(&mut record.party, &mut last_party);
        forward_fill(&mut record.barely_true_counts, &mut last_barely_true);
        forward_fill(&mut record.false_counts, &mut last_false);
        forward_fill(&mut record.half_true_counts, &mut last_half_true);
        forward_fill(&mut record.mostly_true_counts, &mut last_mostly_true);
        forward_fill(&mut record.pants_on_fire_counts, &mut last_pants_on_fire);
    }
}

fn forward_fill(field: &mut Option<String>, last: &mut Option<String>) {
    match field {
        Some(value) => *last = Some(value.clone()),
        None => *field = last.clone(),
    }
}

/// Derive the cleaned state/party attributes for every record,
/// accumulating counts into `summary`.
pub fn enrich(records: &[LiarRecord], summary: &mut CleaningSummary) -> Vec<CleanedAttributes> {
    records
        .iter()
        .map(|record| {
            let attrs = CleanedAttributes::derive(record.state.as_deref(), record.party.as_deref());
            summary.add(&attrs);
            attrs
        })
        .collect()
}

/// Project onto the canonical schema, normalizing statements.
pub fn reconcile(records: &[LiarRecord], normalizer: &Normalizer) -> Vec<CanonicalRecord> {
    records
        .iter()
        .map(|record| CanonicalRecord {
            label: record.label.clone().unwrap_or_default(),
            statement: normalizer.normalize(record.statement.as_deref().unwrap_or_default()),
            source: Source::Liar,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::cleaning::CleaningSummary;
    use crate::normalize::Normalizer;
    use crate::sources::Source;

    use super::*;

    fn gen_records() -> Vec<LiarRecord> {
        let tsv = "1.json\tfalse\tThe sky is green.\teconomy\talice\tsenator\ttx\trepublican\t0\t1\t2\t3\t4\ta speech\n\
                   2.json\thalf-true\tTaxes went up.\t\tbob\t\t\t\t5\t6\t7\t8\t9\t\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(tsv.as_bytes()).unwrap();
        from_path(file.path()).unwrap()
    }

    #[test]
    fn test_load() {
        let records = gen_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label.as_deref(), Some("false"));
        assert_eq!(records[1].statement.as_deref(), Some("Taxes went up."));
        assert_eq!(records[1].state, None);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let path = std::path::Path::new("does/not/exist.tsv");
        assert!(from_path(path).is_err());
    }

    #[test]
    fn test_fill_missing() {
        let mut records = gen_records();
        fill_missing(&mut records);

        // sparse columns get the sentinel
        assert_eq!(records[1].state.as_deref(), Some("Unknown"));
        assert_eq!(records[1].job_title.as_deref(), Some("Unknown"));
        assert_eq!(records[1].context.as_deref(), Some("Unknown"));

        // dense columns carry the previous value forward
        assert_eq!(records[1].subject.as_deref(), Some("economy"));
        assert_eq!(records[1].party.as_deref(), Some("republican"));

        // present values are untouched
        assert_eq!(records[1].speaker.as_deref(), Some("bob"));
        assert_eq!(records[1].barely_true_counts.as_deref(), Some("5"));
    }

    #[test]
    fn test_fill_missing_no_prior_value() {
        let mut records = gen_records();
        records[0].subject = None;
        records.truncate(1);
        fill_missing(&mut records);
        assert_eq!(records[0].subject, None);
    }

    #[test]
    fn test_enrich() {
        let mut records = gen_records();
        fill_missing(&mut records);
        let mut summary = CleaningSummary::default();
        let attrs = enrich(&records, &mut summary);

        assert_eq!(attrs[0].state_cleaned, "Texas");
        assert_eq!(attrs[0].party_cleaned, "Republican");
        assert_eq!(attrs[1].state_cleaned, "Unknown");
        assert!(attrs[1].flagged_for_review);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.unknown_state, 1);
    }

    #[test]
    fn test_reconcile() {
        let records = gen_records();
        let canonical = reconcile(&records, &Normalizer::default());

        assert_eq!(canonical.len(), 2);
        assert_eq!(canonical[0].label, "false");
        assert_eq!(canonical[0].statement, "sky green");
        assert_eq!(canonical[0].source, Source::Liar);
    }
}
