//! End-to-end corpus build.
//!
//! Loads the five inputs from a data directory, applies missing-value and
//! cleaning policies, reconciles everything onto the canonical schema,
//! assembles, splits and writes the two partitions plus a build report.
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::cleaning::CleaningSummary;
use crate::error::Error;
use crate::normalize::Normalizer;
use crate::sources::{liar, politifact, snopes, CanonicalRecord};

use super::{assemble, stratified_split, BuildReport, CorpusRecord, SplitConfig};

const LIAR_FILES: [&str; 3] = ["train.tsv", "test.tsv", "valid.tsv"];
const POLITIFACT_PATTERN: &str = "politifact_factchecks_*.csv";
const SNOPES_FILE: &str = "snopes_factchecks_data.csv";

const KNOWLEDGE_BASE_FILE: &str = "knowledge_base.csv";
const EVALUATION_SET_FILE: &str = "evaluation_set.csv";
const REPORT_FILE: &str = "build_report.json";

/// Corpus build pipeline. `src` holds the input files, outputs land in
/// `dst` (created if needed).
pub struct BuildPipeline {
    src: PathBuf,
    dst: PathBuf,
    split: SplitConfig,
}

impl BuildPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, split: SplitConfig) -> Self {
        Self { src, dst, split }
    }

    pub fn run(&self) -> Result<BuildReport, Error> {
        let normalizer = Normalizer::default();
        let mut summary = CleaningSummary::default();
        let mut reconciled: Vec<Vec<CanonicalRecord>> = Vec::new();

        for file in LIAR_FILES {
            let mut records = liar::from_path(&self.src.join(file))?;
            liar::fill_missing(&mut records);
            liar::enrich(&records, &mut summary);
            reconciled.push(liar::reconcile(&records, &normalizer));
        }
        summary.log();

        let politifact_records = politifact::from_path(&self.politifact_path()?)?;
        reconciled.push(politifact::reconcile(&politifact_records, &normalizer));

        let snopes_records = snopes::from_path(&self.src.join(SNOPES_FILE))?;
        reconciled.push(snopes::reconcile(&snopes_records, &normalizer));

        let combined = assemble(reconciled);
        info!("combined corpus: {} rows", combined.len());

        let (knowledge_base, evaluation_set) = stratified_split(combined, &self.split)?;

        fs::create_dir_all(&self.dst)?;
        write_records(&self.dst.join(KNOWLEDGE_BASE_FILE), &knowledge_base)?;
        write_records(&self.dst.join(EVALUATION_SET_FILE), &evaluation_set)?;

        let report = BuildReport::new(&knowledge_base, &evaluation_set, summary);
        report.write(&self.dst.join(REPORT_FILE))?;
        Ok(report)
    }

    /// The PolitiFact scrape file carries its scrape date in the name;
    /// resolve it by pattern. With several matches the lexicographically
    /// last (= most recent date) wins.
    fn politifact_path(&self) -> Result<PathBuf, Error> {
        let pattern = self.src.join(POLITIFACT_PATTERN);
        let pattern = pattern.to_string_lossy();

        let mut matches: Vec<PathBuf> = glob::glob(&pattern)?.collect::<Result<_, _>>()?;
        matches.sort();
        matches
            .pop()
            .ok_or_else(|| Error::MissingInput(self.src.join(POLITIFACT_PATTERN)))
    }
}

fn write_records(path: &Path, records: &[CorpusRecord]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("{}: {} rows written", path.display(), records.len());
    Ok(())
}
