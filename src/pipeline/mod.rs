/*! Corpus assembly pipeline.

Concatenates reconciled sources, assigns identifiers, splits into the
knowledge base and the evaluation set, and writes the results along with a
build report.
!*/

pub mod assemble;
pub mod build;
pub mod report;
pub mod split;

pub use assemble::{assemble, CorpusRecord};
pub use build::BuildPipeline;
pub use report::BuildReport;
pub use split::{stratified_split, SplitConfig};
