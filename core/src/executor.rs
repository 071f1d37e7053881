//! The boundary between the scan pipeline and the operating system.
//!
//! The pipeline only depends on [`ProcessExecutor`]. [`process::SubprocessExecutor`]
//! is the implementation that actually spawns nmap; tests plug in their own.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod process;

pub use process::SubprocessExecutor;

/// Runs a command line to completion.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Executes `args` (program first) and waits until it exits or `timeout`
    /// elapses, in which case the process is terminated.
    ///
    /// Any outcome other than a zero exit status is an error.
    async fn execute(&self, args: &[String], timeout: Duration) -> Result<(), ExecutionError>;
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Empty command line")]
    EmptyCommand,

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' timed out after {}s", timeout.as_secs_f64())]
    Timeout { program: String, timeout: Duration },

    /// `code` is `None` when the process was killed by a signal.
    #[error("'{program}' exited unsuccessfully (code {code:?}): {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}
