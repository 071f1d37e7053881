use nmapr_common::config::ScanOptions;
use nmapr_common::network::host::Host;
use nmapr_common::output::OutputFile;
use nmapr_core::executor::ExecutionError;
use nmapr_core::{Nmap, ScanError};

use crate::utils::{Behaviour, NO_PORTS, SSH_REPORT, ScriptedExecutor};

fn nmap_with(behaviour: Behaviour) -> (Nmap, ScriptedExecutor) {
    let executor = ScriptedExecutor::new(behaviour);
    let nmap = Nmap::new(Box::new(executor.clone()), OutputFile::temporary().unwrap());
    (nmap, executor)
}

/// Service detection against one target without ports builds the minimal
/// command line.
#[tokio::test]
async fn service_scan_command_line() {
    let (mut nmap, executor) = nmap_with(Behaviour::WriteReport(SSH_REPORT));
    nmap.service_info(true).executable("nmap");

    nmap.scan(&["10.0.0.1"], &NO_PORTS).await.unwrap();

    assert_eq!(
        executor.recorded(),
        [vec!["nmap", "-sV", "10.0.0.1", "-oX", nmap.output().as_str()]]
    );
}

#[tokio::test]
async fn single_ssh_host_is_decoded() {
    let (nmap, _) = nmap_with(Behaviour::WriteReport(SSH_REPORT));

    let hosts: Vec<Host> = nmap.scan(&["10.0.0.1"], &["22"]).await.unwrap();
    assert_eq!(hosts.len(), 1);

    let host = &hosts[0];
    assert_eq!(host.status(), "up");
    assert_eq!(host.addresses().len(), 1);
    assert_eq!(host.address("10.0.0.1").unwrap().kind(), "ipv4");
    assert!(host.hostnames().is_empty());

    let port = &host.ports()[0];
    assert_eq!(host.ports().len(), 1);
    assert_eq!((port.id(), port.protocol(), port.state()), ("22", "tcp", "open"));
    assert_eq!(port.service().name(), "ssh");
    assert_eq!(port.service().product(), "");
    assert_eq!(port.service().version(), "");
}

#[tokio::test]
async fn port_list_and_host_discovery() {
    let (nmap, executor) = nmap_with(Behaviour::WriteReport(SSH_REPORT));

    nmap.scan(&["10.0.0.1"], &["22", "80"]).await.unwrap();
    let discovery = ScanOptions::new().disable_port_scan(true);
    nmap.scan_with(&discovery, &["10.0.0.1"], &["22", "80"]).await.unwrap();

    let calls = executor.recorded();
    assert_eq!(calls[0][1], "-p 22,80");
    assert_eq!(calls[1][1], "-sn");
    assert!(!calls[1].iter().any(|arg| arg.starts_with("-p")));
}

#[tokio::test]
async fn missing_report_fails_without_parsing() {
    let (nmap, executor) = nmap_with(Behaviour::WriteNothing);

    let err = nmap.scan(&["10.0.0.1"], &NO_PORTS).await.unwrap_err();

    assert!(matches!(err, ScanError::MissingOutput { .. }), "{err}");
    assert!(err.to_string().starts_with("Output file not found"));
    assert_eq!(executor.recorded().len(), 1);
}

/// Each scan starts from an empty report path, so a run that writes nothing
/// cannot pick up the hosts of the run before it.
#[tokio::test]
async fn second_scan_without_report_is_missing_output() {
    let (nmap, executor) = nmap_with(Behaviour::WriteReportOnce(SSH_REPORT));

    let hosts = nmap.scan(&["10.0.0.1"], &NO_PORTS).await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert!(hosts[0].address("10.0.0.1").is_some());

    let result = nmap.scan(&["192.168.99.99"], &NO_PORTS).await;
    assert!(matches!(result, Err(ScanError::MissingOutput { .. })), "{result:?}");
    assert_eq!(executor.recorded().len(), 2);
    assert!(!nmap.output().exists());
}

#[tokio::test]
async fn existing_file_at_caller_path_is_not_reported() {
    let scratch = tempfile::tempdir().unwrap();
    let path = scratch.path().join("scan.xml");
    std::fs::write(&path, SSH_REPORT).unwrap();

    let executor = ScriptedExecutor::new(Behaviour::WriteNothing);
    let nmap = Nmap::new(Box::new(executor), OutputFile::at(&path).unwrap());

    let result = nmap.scan(&["192.168.99.99"], &NO_PORTS).await;
    assert!(matches!(result, Err(ScanError::MissingOutput { .. })), "{result:?}");
    assert!(!path.exists());
}

#[tokio::test]
async fn execution_failure_surfaces_unchanged() {
    let (nmap, _) = nmap_with(Behaviour::Fail);

    match nmap.scan(&["nowhere"], &NO_PORTS).await {
        Err(ScanError::Execution(ExecutionError::Failed { code, stderr, .. })) => {
            assert_eq!(code, Some(1));
            assert!(stderr.contains("nowhere"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_report_returns_no_hosts() {
    let (nmap, _) = nmap_with(Behaviour::WriteReport("<nmaprun><host><status state=\"up\"/>"));

    let result = nmap.scan(&["10.0.0.1"], &NO_PORTS).await;
    assert!(matches!(result, Err(ScanError::Parse(_))));
}

#[tokio::test]
async fn temporary_report_is_cleaned_up() {
    let (nmap, _) = nmap_with(Behaviour::WriteReport(SSH_REPORT));
    nmap.scan(&["10.0.0.1"], &NO_PORTS).await.unwrap();

    let path = nmap.output().path().to_path_buf();
    assert!(path.is_file());

    drop(nmap);
    assert!(!path.exists());
}
