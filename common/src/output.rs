//! # Report File
//!
//! nmap writes its XML report to the path given with `-oX`. [`OutputFile`]
//! owns that path for the duration of a scan.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::trace;

const REPORT_NAME: &str = "report.xml";

/// Path of the XML report nmap is told to write.
///
/// The path is always valid UTF-8, so it reaches nmap unchanged as a
/// command line argument.
///
/// Temporary handles live in their own directory, removed with everything in
/// it when the handle is dropped. Handles created with [`OutputFile::at`]
/// belong to the caller and are left alone.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    arg: String,
    dir: Option<TempDir>,
}

impl OutputFile {
    /// Allocates a fresh directory in the system temp directory and points
    /// the report inside it.
    ///
    /// The report itself is not created; nmap creates it.
    pub fn temporary() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("nmapr-").tempdir()?;
        let mut output = Self::at(dir.path().join(REPORT_NAME))?;
        output.dir = Some(dir);
        Ok(output)
    }

    /// Uses a caller provided path. Never removed by this handle.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if the path is not UTF-8.
    pub fn at(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path: PathBuf = path.into();
        let arg = path
            .to_str()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("report path is not valid UTF-8: {}", path.display()),
                )
            })?
            .to_string();

        Ok(Self {
            path,
            arg,
            dir: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as it is handed to nmap.
    pub fn as_str(&self) -> &str {
        &self.arg
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Removes a report left by an earlier run. A missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                trace!("Removed previous report {}", self.arg);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Disarms the cleanup and hands the path to the caller.
    pub fn keep(self) -> PathBuf {
        if let Some(dir) = self.dir {
            let _ = dir.keep();
        }
        self.path
    }
}
