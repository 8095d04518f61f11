//! Page fetching.
use std::time::Duration;

use crate::error::Error;

/// Fetching seam, so harvest loops can run against stub pages in tests.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// Blocking HTTP fetcher with a bounded timeout.
///
/// A failed or timed-out fetch surfaces as a per-page error; the caller
/// decides whether to skip the page (harvesting does).
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Default timeout for listing pages.
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Self::TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, url: &str) -> Result<String, Error> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
