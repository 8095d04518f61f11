//! # Veridict
//!
//! Veridict assembles a unified labeled fact-check corpus from three
//! sources — the LIAR dataset and scraped PolitiFact/Snopes fact-checks —
//! and splits it into a knowledge base and a held-out evaluation set for
//! downstream retrieval-augmented fact-checking.
//!
//! The crate can be used as a CLI tool (`build`, `merge` subcommands) or as
//! a library: each pipeline stage (normalization, field cleaning, schema
//! reconciliation, assembly, snapshot merging) is exposed on its own.
pub mod cleaning;
pub mod cli;
pub mod error;
pub mod io;
pub mod normalize;
pub mod pipeline;
pub mod scraping;
pub mod sources;
