/*! Scraper collaborator interface.

The pipeline does not care how fact-check listings are turned into rows;
it cares about the harvesting contract: fetch paginated listing pages with
a bounded timeout, extract rows behind the [Extract] seam, skip failed
pages, and stop once enough consecutive already-known records show up.

Page extraction (CSS selector logic) is site-specific and lives outside
this crate, behind [Extract].
!*/

mod fetch;
mod harvest;

pub use fetch::{Fetch, Fetcher};
pub use harvest::{Extract, Harvester};
