//! # Scan Orchestration
//!
//! [`Nmap`] is the entry point of the library. It owns the options, the
//! executor and the report path, and runs one scan as:
//! 1. **Command**: [`command::build`] turns options, targets and ports into arguments.
//! 2. **Execution**: any earlier report is removed, then the injected
//!    [`ProcessExecutor`] runs the arguments under the timeout.
//! 3. **Decoding**: [`report::parse_file`] reads the hosts back from the report.
//!
//! A failure at any step aborts the scan and is returned as a [`ScanError`].
//!
//! An instance reuses one report path, so it must not run two scans at the
//! same time. Concurrent scans need their own instances and paths.

use std::time::Duration;

use nmapr_common::config::ScanOptions;
use nmapr_common::network::host::Host;
use nmapr_common::output::OutputFile;
use tracing::{debug, info};

use crate::command;
use crate::error::{Result, ScanError};
use crate::executor::{ProcessExecutor, SubprocessExecutor};
use crate::report;

pub struct Nmap {
    executor: Box<dyn ProcessExecutor>,
    output: OutputFile,
    options: ScanOptions,
}

impl Nmap {
    /// Creates a scanner with default [`ScanOptions`].
    pub fn new(executor: Box<dyn ProcessExecutor>, output: OutputFile) -> Self {
        Self {
            executor,
            output,
            options: ScanOptions::default(),
        }
    }

    /// Spawns the real `nmap` binary and writes to a fresh temporary report,
    /// removed again when the scanner is dropped.
    pub fn with_defaults() -> std::io::Result<Self> {
        Ok(Self::new(
            Box::new(SubprocessExecutor::new()),
            OutputFile::temporary()?,
        ))
    }

    /// Replaces every option at once.
    pub fn options(&mut self, options: ScanOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn scan_options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn output(&self) -> &OutputFile {
        &self.output
    }

    pub fn os_detection(&mut self, enable: bool) -> &mut Self {
        self.options.os_detection = enable;
        self
    }

    pub fn service_info(&mut self, enable: bool) -> &mut Self {
        self.options.service_info = enable;
        self
    }

    pub fn verbose(&mut self, enable: bool) -> &mut Self {
        self.options.verbose = enable;
        self
    }

    pub fn disable_port_scan(&mut self, disable: bool) -> &mut Self {
        self.options.disable_port_scan = disable;
        self
    }

    pub fn disable_reverse_dns(&mut self, disable: bool) -> &mut Self {
        self.options.disable_reverse_dns = disable;
        self
    }

    pub fn treat_hosts_as_online(&mut self, enable: bool) -> &mut Self {
        self.options.treat_hosts_as_online = enable;
        self
    }

    pub fn executable(&mut self, executable: impl Into<String>) -> &mut Self {
        self.options.executable = executable.into();
        self
    }

    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.options.timeout = timeout;
        self
    }

    /// The argument list [`Nmap::scan`] would execute.
    pub fn command<T: AsRef<str>, P: AsRef<str>>(&self, targets: &[T], ports: &[P]) -> Vec<String> {
        command::build(&self.options, targets, ports, self.output.as_str())
    }

    /// Scans `targets` with the scanner's own options.
    pub async fn scan<T: AsRef<str>, P: AsRef<str>>(
        &self,
        targets: &[T],
        ports: &[P],
    ) -> Result<Vec<Host>> {
        self.scan_with(&self.options, targets, ports).await
    }

    /// Scans `targets` with `options`, leaving the scanner's options untouched.
    pub async fn scan_with<T: AsRef<str>, P: AsRef<str>>(
        &self,
        options: &ScanOptions,
        targets: &[T],
        ports: &[P],
    ) -> Result<Vec<Host>> {
        let args = command::build(options, targets, ports, self.output.as_str());
        info!("Starting nmap against {} target(s)", targets.len());

        // An earlier run may have left a report at this path.
        self.output.clear().map_err(|source| ScanError::Output {
            path: self.output.path().to_path_buf(),
            source,
        })?;

        self.executor.execute(&args, options.timeout).await?;

        if !self.output.exists() {
            return Err(ScanError::MissingOutput {
                path: self.output.path().to_path_buf(),
            });
        }

        let hosts = report::parse_file(self.output.path())?;
        debug!("Scan returned {} hosts", hosts.len());
        Ok(hosts)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
