#![cfg(unix)]
//! Runs the real subprocess adapter against a shell script posing as nmap.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use nmapr_core::executor::ExecutionError;
use nmapr_core::{Nmap, ScanError};

use crate::utils::{NO_PORTS, SSH_REPORT};

/// An executable script in its own temp dir. Removed on drop.
struct FakeNmap {
    _dir: TempDir,
    path: PathBuf,
}

impl FakeNmap {
    fn new(name: &str, body: &str) -> Self {
        let dir = tempfile::Builder::new().prefix("nmapr-fake-").tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self { _dir: dir, path }
    }

    fn executable(&self) -> String {
        self.path.to_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn script_writes_report_to_last_argument() {
    let body = format!("for last; do :; done\ncat > \"$last\" <<'XML'\n{SSH_REPORT}XML");
    let fake = FakeNmap::new("report", &body);

    let mut nmap = Nmap::with_defaults().unwrap();
    nmap.executable(fake.executable()).disable_reverse_dns(true);

    let hosts = nmap.scan(&["10.0.0.1"], &["22"]).await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].open_ports().count(), 1);
}

#[tokio::test]
async fn silent_success_is_missing_output() {
    let fake = FakeNmap::new("silent", "exit 0");

    let mut nmap = Nmap::with_defaults().unwrap();
    nmap.executable(fake.executable());

    let result = nmap.scan(&["10.0.0.1"], &NO_PORTS).await;
    assert!(matches!(result, Err(ScanError::MissingOutput { .. })), "{result:?}");
}

#[tokio::test]
async fn rerun_after_silent_exit_is_missing_output() {
    // Writes the report the first time only; the marker sits next to the script.
    let body = format!(
        "marker=\"$(dirname \"$0\")/ran\"\n[ -e \"$marker\" ] && exit 0\ntouch \"$marker\"\n\
         for last; do :; done\ncat > \"$last\" <<'XML'\n{SSH_REPORT}XML"
    );
    let fake = FakeNmap::new("once", &body);

    let mut nmap = Nmap::with_defaults().unwrap();
    nmap.executable(fake.executable());

    let hosts = nmap.scan(&["10.0.0.1"], &["22"]).await.unwrap();
    assert_eq!(hosts.len(), 1);

    let result = nmap.scan(&["192.168.99.99"], &["22"]).await;
    assert!(matches!(result, Err(ScanError::MissingOutput { .. })), "{result:?}");
}

#[tokio::test]
async fn slow_scan_hits_the_timeout() {
    let fake = FakeNmap::new("slow", "sleep 30");

    let mut nmap = Nmap::with_defaults().unwrap();
    nmap.executable(fake.executable()).timeout(Duration::from_millis(300));

    let result = nmap.scan(&["10.0.0.1"], &NO_PORTS).await;
    assert!(
        matches!(result, Err(ScanError::Execution(ExecutionError::Timeout { .. }))),
        "{result:?}"
    );
}
