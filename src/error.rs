//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Http(reqwest::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// A source table does not carry a column its schema requires.
    /// Fatal: the reconciler assumes a fixed schema per source.
    MissingColumn {
        source: &'static str,
        column: &'static str,
    },
    /// An input file expected by the build pipeline is absent.
    MissingInput(PathBuf),
    /// A `source` stratum is too small to be represented in both partitions.
    Stratification {
        source: &'static str,
        rows: usize,
    },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
