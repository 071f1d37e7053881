use std::time::Duration;

pub const DEFAULT_EXECUTABLE: &str = "nmap";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Options that shape a single nmap invocation.
///
/// Build it as a struct literal over [`ScanOptions::default`] or through the
/// chained setters. No field is validated; nmap rejects what it does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Enables OS detection (`-O`).
    pub os_detection: bool,
    /// Detects service and version info on open ports (`-sV`).
    pub service_info: bool,
    /// Raises nmap's own verbosity (`-v`).
    pub verbose: bool,
    /// Host discovery only (`-sn`).
    ///
    /// Takes precedence over any port list passed to the scan.
    pub disable_port_scan: bool,
    /// Never does reverse DNS resolution (`-n`).
    pub disable_reverse_dns: bool,
    /// Skips host discovery and treats every target as online (`-Pn`).
    pub treat_hosts_as_online: bool,
    /// Program name or path of the nmap binary.
    pub executable: String,
    /// Upper bound for the whole nmap run.
    pub timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            os_detection: false,
            service_info: false,
            verbose: false,
            disable_port_scan: false,
            disable_reverse_dns: false,
            treat_hosts_as_online: false,
            executable: DEFAULT_EXECUTABLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn os_detection(mut self, enable: bool) -> Self {
        self.os_detection = enable;
        self
    }

    pub fn service_info(mut self, enable: bool) -> Self {
        self.service_info = enable;
        self
    }

    pub fn verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    pub fn disable_port_scan(mut self, disable: bool) -> Self {
        self.disable_port_scan = disable;
        self
    }

    pub fn disable_reverse_dns(mut self, disable: bool) -> Self {
        self.disable_reverse_dns = disable;
        self
    }

    pub fn treat_hosts_as_online(mut self, enable: bool) -> Self {
        self.treat_hosts_as_online = enable;
        self
    }

    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
