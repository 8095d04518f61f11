//! # Veridict
//!
//! Fact-check corpus builder.
//!
//! ```sh
//! veridict 0.3.0
//! fact-check corpus tool.
//!
//! USAGE:
//!     veridict <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build    Build the unified corpus and split it
//!     help     Prints this message or the help of the given subcommand(s)
//!     merge    Merge a scraped batch into a snapshot
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use veridict::cli;
use veridict::error::Error;
use veridict::io::{snapshot, Snapshot};
use veridict::pipeline::{BuildPipeline, SplitConfig};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Veridict::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Veridict::Build(b) => {
            let split = SplitConfig {
                eval_size: b.eval_size,
                seed: b.seed,
            };
            let pipeline = BuildPipeline::new(b.src, b.dst, split);
            let report = pipeline.run()?;
            report.log();
        }
        cli::Veridict::Merge(m) => {
            let incoming = snapshot::read_batch(&m.incoming)?;
            let snapshot = Snapshot::new(m.snapshot);
            let merged = snapshot.merge(incoming, m.key, m.precedence)?;
            info!("total entries: {}", merged.len());
        }
    };
    Ok(())
}
