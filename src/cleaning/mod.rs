/*! Categorical field cleaning.

Maps free-text `state` and `party` values from LIAR records onto canonical
vocabularies, and aggregates counts so that sentinel substitutions stay
observable in the logs instead of disappearing silently into the data.
!*/

pub mod party;
pub mod state;

use std::collections::HashMap;

use itertools::Itertools;
use log::info;
use serde::Serialize;

pub use party::clean_party;
pub use state::{clean_state, is_us_state};

/// Derived, append-only attributes of a LIAR record.
/// The raw columns are kept; these come in addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedAttributes {
    pub state_cleaned: String,
    pub is_us_state: bool,
    pub flagged_for_review: bool,
    pub party_cleaned: String,
}

impl CleanedAttributes {
    pub fn derive(state: Option<&str>, party: Option<&str>) -> Self {
        let state_cleaned = clean_state(state);
        let is_us_state = is_us_state(&state_cleaned);
        let flagged_for_review = state_cleaned == "Unknown";
        let party_cleaned = clean_party(party);

        Self {
            state_cleaned,
            is_us_state,
            flagged_for_review,
            party_cleaned,
        }
    }
}

/// Aggregate counts over cleaned attributes.
#[derive(Debug, Default, Serialize)]
pub struct CleaningSummary {
    pub rows: u64,
    pub unknown_state: u64,
    pub non_us_state: u64,
    party_counts: HashMap<String, u64>,
}

impl CleaningSummary {
    pub fn add(&mut self, attrs: &CleanedAttributes) {
        self.rows += 1;
        if attrs.flagged_for_review {
            self.unknown_state += 1;
        }
        if !attrs.is_us_state {
            self.non_us_state += 1;
        }
        self.party_counts
            .entry(attrs.party_cleaned.clone())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    /// Log the summary at info level, parties by descending count.
    pub fn log(&self) {
        info!(
            "cleaned {} rows: {} with unknown state, {} not recognized as US states",
            self.rows, self.unknown_state, self.non_us_state
        );
        for (party, count) in self.party_counts.iter().sorted_by(|a, b| b.1.cmp(a.1)) {
            info!("party {party}: {count}");
        }
    }
}
