//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::io::{MergeKey, Precedence};

#[derive(Debug, StructOpt)]
#[structopt(name = "veridict", about = "fact-check corpus tool.")]
/// Holds every command that is callable by the `veridict` command.
pub enum Veridict {
    #[structopt(about = "Build the unified corpus and split it")]
    Build(Build),
    #[structopt(about = "Merge a scraped batch into a snapshot")]
    Merge(Merge),
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
pub struct Build {
    #[structopt(parse(from_os_str), help = "data directory with source files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output directory")]
    pub dst: PathBuf,
    #[structopt(
        long = "eval-size",
        default_value = "0.1",
        help = "fraction held out for evaluation"
    )]
    pub eval_size: f64,
    #[structopt(long, default_value = "42", help = "shuffle seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "snapshot csv location")]
    pub snapshot: PathBuf,
    #[structopt(parse(from_os_str), help = "scraped batch csv")]
    pub incoming: PathBuf,
    #[structopt(
        long,
        default_value = "link",
        help = "deduplication key (link, link-claim)"
    )]
    pub key: MergeKey,
    #[structopt(
        long,
        default_value = "last",
        help = "row order of merged snapshot (first, last)"
    )]
    pub precedence: Precedence,
}
