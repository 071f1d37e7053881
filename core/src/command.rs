//! Translates [`ScanOptions`] into the nmap argument list.

use nmapr_common::config::ScanOptions;

/// Builds the full argument list, program name first.
///
/// The order is fixed and independent of which flags are set:
/// executable, `-O`, `-sV`, `-v`, `-sn` or `-p <ports>`, `-n`, `-Pn`,
/// targets, `-oX <output>`. The port flag is a single argument
/// (`"-p 22,80"`). Targets and ports are passed through untouched.
pub fn build<T, P>(options: &ScanOptions, targets: &[T], ports: &[P], output: &str) -> Vec<String>
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    let mut args: Vec<String> = vec![options.executable.clone()];

    if options.os_detection {
        args.push("-O".to_string());
    }

    if options.service_info {
        args.push("-sV".to_string());
    }

    if options.verbose {
        args.push("-v".to_string());
    }

    if options.disable_port_scan {
        args.push("-sn".to_string());
    } else if !ports.is_empty() {
        let joined: Vec<&str> = ports.iter().map(AsRef::as_ref).collect();
        args.push(format!("-p {}", joined.join(",")));
    }

    if options.disable_reverse_dns {
        args.push("-n".to_string());
    }

    if options.treat_hosts_as_online {
        args.push("-Pn".to_string());
    }

    args.extend(targets.iter().map(|t| t.as_ref().to_string()));

    args.push("-oX".to_string());
    args.push(output.to_string());

    args
}
