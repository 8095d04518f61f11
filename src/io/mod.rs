/*! Snapshot persistence.

The scrapers accumulate their results in an on-disk CSV snapshot keyed by a
natural key. This module reads, merges and rewrites that snapshot.
!*/

pub mod snapshot;

pub use snapshot::{merge, FactCheckRow, MergeKey, Precedence, Snapshot};
