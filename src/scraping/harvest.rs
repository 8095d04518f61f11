//! Paginated harvest loop.
use std::collections::HashSet;

use log::{info, warn};

use crate::io::FactCheckRow;

use super::Fetch;

/// Turns a fetched listing page into structured rows.
/// Implementations hold the site-specific selector logic.
pub trait Extract {
    fn extract(&self, page: &str) -> Vec<FactCheckRow>;
}

/// Harvests a paginated fact-check listing.
///
/// Pages are fetched sequentially; a failed page is logged and skipped,
/// never aborting the batch. Records whose link is already known count
/// toward a consecutive-known streak, and once the streak reaches
/// `stop_after_known` the harvest stops: everything past that point was
/// collected by an earlier run.
pub struct Harvester<F, E> {
    fetcher: F,
    extractor: E,
    stop_after_known: usize,
}

impl<F: Fetch, E: Extract> Harvester<F, E> {
    pub fn new(fetcher: F, extractor: E, stop_after_known: usize) -> Self {
        Self {
            fetcher,
            extractor,
            stop_after_known,
        }
    }

    /// Harvest up to `max_pages` listing pages, returning the rows not yet
    /// present in `known` (a set of links from the snapshot).
    pub fn harvest(
        &self,
        base_url: &str,
        max_pages: usize,
        known: &HashSet<String>,
    ) -> Vec<FactCheckRow> {
        let mut collected = Vec::new();
        let mut known_streak = 0;

        for page in 1..=max_pages {
            let url = format!("{base_url}?page={page}");
            let body = match self.fetcher.fetch(&url) {
                Ok(body) => body,
                Err(e) => {
                    warn!("page {page}: fetch failed, skipping ({e:?})");
                    continue;
                }
            };

            for row in self.extractor.extract(&body) {
                if known.contains(&row.link) {
                    known_streak += 1;
                    if self.stop_after_known > 0 && known_streak >= self.stop_after_known {
                        info!(
                            "stopping after {known_streak} consecutive known records \
                             ({} new collected)",
                            collected.len()
                        );
                        return collected;
                    }
                } else {
                    known_streak = 0;
                    collected.push(row);
                }
            }
        }

        info!("harvested {} new records", collected.len());
        collected
    }
}
