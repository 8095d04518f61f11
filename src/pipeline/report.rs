//! Build report.
//!
//! Summarizes a corpus build: partition sizes, per-source proportions and
//! cleaning counts. Written as JSON next to the output CSVs and logged, so
//! recoverable sentinel substitutions stay visible.
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::cleaning::CleaningSummary;
use crate::error::Error;

use super::CorpusRecord;

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub total: usize,
    pub knowledge_base: usize,
    pub evaluation_set: usize,
    pub knowledge_base_sources: BTreeMap<&'static str, f64>,
    pub evaluation_set_sources: BTreeMap<&'static str, f64>,
    pub cleaning: CleaningSummary,
}

impl BuildReport {
    pub fn new(
        knowledge_base: &[CorpusRecord],
        evaluation_set: &[CorpusRecord],
        cleaning: CleaningSummary,
    ) -> Self {
        Self {
            total: knowledge_base.len() + evaluation_set.len(),
            knowledge_base: knowledge_base.len(),
            evaluation_set: evaluation_set.len(),
            knowledge_base_sources: proportions(knowledge_base),
            evaluation_set_sources: proportions(evaluation_set),
            cleaning,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn log(&self) {
        info!(
            "corpus built: {} rows total, {} in knowledge base, {} held out",
            self.total, self.knowledge_base, self.evaluation_set
        );
        for (source, proportion) in &self.knowledge_base_sources {
            info!("knowledge base {source}: {proportion:.4}");
        }
        for (source, proportion) in &self.evaluation_set_sources {
            info!("evaluation set {source}: {proportion:.4}");
        }
    }
}

fn proportions(records: &[CorpusRecord]) -> BTreeMap<&'static str, f64> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.source.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(source, count)| (source, count as f64 / records.len() as f64))
        .collect()
}
