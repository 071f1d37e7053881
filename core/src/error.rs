use std::path::PathBuf;

use thiserror::Error;

use crate::executor::ExecutionError;
use crate::report::ParseError;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Everything that can abort a scan. Nothing is retried.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The nmap process could not be run to a successful end.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// A report left by an earlier run could not be removed.
    #[error("Failed to remove previous report {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// nmap exited successfully but left no report behind.
    #[error("Output file not found (\"{}\")", path.display())]
    MissingOutput { path: PathBuf },

    /// The report exists but could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
