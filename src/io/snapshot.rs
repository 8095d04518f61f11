//! Snapshot CSV and incremental merge.
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One persisted fact-check, as produced by a scrape run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckRow {
    pub claim: String,
    pub verdict: String,
    pub summary: String,
    pub source: String,
    pub link: String,
}

/// Natural key used for deduplication across scrape runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKey {
    /// article URL
    Link,
    /// article URL + claim text
    LinkClaim,
}

impl MergeKey {
    fn of(&self, row: &FactCheckRow) -> (String, Option<String>) {
        match self {
            MergeKey::Link => (row.link.clone(), None),
            MergeKey::LinkClaim => (row.link.clone(), Some(row.claim.clone())),
        }
    }
}

impl FromStr for MergeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(MergeKey::Link),
            "link-claim" => Ok(MergeKey::LinkClaim),
            other => Err(format!("unknown merge key '{other}' (link, link-claim)")),
        }
    }
}

/// Resulting row order of a merge. Incoming rows win on key conflict under
/// both variants; this only decides where the surviving rows sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// incoming rows first, then the surviving existing rows
    First,
    /// existing rows first (scrape order preserved), incoming appended
    Last,
}

impl FromStr for Precedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Precedence::First),
            "last" => Ok(Precedence::Last),
            other => Err(format!("unknown precedence '{other}' (first, last)")),
        }
    }
}

/// Merge `incoming` into `existing`, deduplicating on `key`.
///
/// Under [Precedence::Last] the list is existing-then-incoming and the last
/// occurrence of a key survives; under [Precedence::First] it is
/// incoming-then-existing and the first occurrence survives. Either way a
/// re-scraped record replaces its older copy, which makes the merge
/// idempotent: replaying the same batch changes nothing.
pub fn merge(
    existing: Vec<FactCheckRow>,
    incoming: Vec<FactCheckRow>,
    key: MergeKey,
    precedence: Precedence,
) -> Vec<FactCheckRow> {
    match precedence {
        Precedence::Last => {
            let ordered: Vec<FactCheckRow> = existing.into_iter().chain(incoming).collect();
            keep_last(ordered, key)
        }
        Precedence::First => {
            let ordered: Vec<FactCheckRow> = incoming.into_iter().chain(existing).collect();
            keep_first(ordered, key)
        }
    }
}

fn keep_first(rows: Vec<FactCheckRow>, key: MergeKey) -> Vec<FactCheckRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(key.of(row)))
        .collect()
}

fn keep_last(rows: Vec<FactCheckRow>, key: MergeKey) -> Vec<FactCheckRow> {
    let mut kept: Vec<FactCheckRow> = {
        let mut seen = HashSet::new();
        rows.into_iter()
            .rev()
            .filter(|row| seen.insert(key.of(row)))
            .collect()
    };
    kept.reverse();
    kept
}

/// Handle to the on-disk snapshot CSV.
///
/// Reads and writes are whole-file, once per invocation. Single-writer
/// convention: concurrent scrape runs against the same snapshot are not
/// supported.
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read all snapshot rows. An absent file is not an error: the snapshot
    /// simply does not exist yet and reads as empty.
    pub fn read(&self) -> Result<Vec<FactCheckRow>, Error> {
        if !self.path.is_file() {
            warn!("{}: no snapshot yet, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows: Result<Vec<FactCheckRow>, csv::Error> = reader.deserialize().collect();
        Ok(rows?)
    }

    /// Overwrite the snapshot. Every field is quoted.
    pub fn write(&self, rows: &[FactCheckRow]) -> Result<(), Error> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_path(&self.path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Merge a scraped batch into the snapshot and persist the result.
    pub fn merge(
        &self,
        incoming: Vec<FactCheckRow>,
        key: MergeKey,
        precedence: Precedence,
    ) -> Result<Vec<FactCheckRow>, Error> {
        let existing = self.read()?;
        let merged = merge(existing, incoming, key, precedence);
        self.write(&merged)?;
        info!(
            "{}: snapshot updated, {} entries",
            self.path.display(),
            merged.len()
        );
        Ok(merged)
    }
}

/// Read a scraped batch CSV. Unlike a snapshot read, an absent batch file
/// is an error.
pub fn read_batch(path: &Path) -> Result<Vec<FactCheckRow>, Error> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let rows: Result<Vec<FactCheckRow>, csv::Error> = reader.deserialize().collect();
    Ok(rows?)
}
