//! Stratified knowledge-base / evaluation split.
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Error;
use crate::sources::Source;

use super::CorpusRecord;

/// Split parameters. Defaults: 10% held out, seed 42.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    pub eval_size: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            eval_size: 0.1,
            seed: 42,
        }
    }
}

/// Partition the combined table into `(knowledge_base, evaluation_set)`,
/// stratified by `source`.
///
/// Rows are shuffled within each stratum with a seeded RNG, then each
/// stratum contributes `round(len * eval_size)` rows (at least 1, at most
/// `len - 1`) to the evaluation set, so per-source proportions survive in
/// both partitions up to rounding. The partitions are disjoint and together
/// cover every input row.
///
/// A stratum with fewer than 2 rows cannot be represented on both sides and
/// aborts with [Error::Stratification]; there is no silent non-stratified
/// fallback.
pub fn stratified_split(
    records: Vec<CorpusRecord>,
    config: &SplitConfig,
) -> Result<(Vec<CorpusRecord>, Vec<CorpusRecord>), Error> {
    if !(config.eval_size > 0.0 && config.eval_size < 1.0) {
        return Err(Error::Custom(format!(
            "eval_size must be in (0, 1), got {}",
            config.eval_size
        )));
    }

    let mut strata: HashMap<Source, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        strata.entry(record.source).or_default().push(idx);
    }

    for (source, indices) in &strata {
        if indices.len() < 2 {
            return Err(Error::Stratification {
                source: source.as_str(),
                rows: indices.len(),
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut held_out: HashSet<usize> = HashSet::new();

    // strata in stable order so a given seed always yields the same split
    for (source, mut indices) in strata
        .into_iter()
        .sorted_by_key(|(source, _)| source.as_str())
    {
        let len = indices.len();
        indices.shuffle(&mut rng);

        let n_eval = (len as f64 * config.eval_size).round() as usize;
        let n_eval = n_eval.clamp(1, len - 1);
        info!("{source}: {len} rows, {n_eval} held out");

        held_out.extend(indices.into_iter().take(n_eval));
    }

    let mut knowledge_base = Vec::with_capacity(records.len() - held_out.len());
    let mut evaluation_set = Vec::with_capacity(held_out.len());
    for (idx, record) in records.into_iter().enumerate() {
        if held_out.contains(&idx) {
            evaluation_set.push(record);
        } else {
            knowledge_base.push(record);
        }
    }

    Ok((knowledge_base, evaluation_set))
}
