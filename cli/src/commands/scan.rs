use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use nmapr_common::network::host::Host;
use nmapr_common::output::OutputFile;
use nmapr_core::Nmap;
use nmapr_core::executor::SubprocessExecutor;
use tracing::{info, warn};

use super::ScanArgs;
use crate::terminal::{colors, format, print, spinner};

type Detail = (String, ColoredString);

pub fn output_file(args: &ScanArgs) -> anyhow::Result<OutputFile> {
    let output = match &args.output {
        Some(path) => OutputFile::at(path),
        None => OutputFile::temporary(),
    };
    output.context("cannot prepare the report file")
}

pub async fn scan(args: ScanArgs, q_level: u8) -> anyhow::Result<()> {
    let mut nmap = Nmap::new(Box::new(SubprocessExecutor::new()), output_file(&args)?);
    nmap.options(args.to_options());

    info!("Running {}", nmap.command(&args.targets, &args.ports).join(" "));

    spinner::start("Waiting for nmap...");
    let start_time: Instant = Instant::now();
    let result = nmap.scan(&args.targets, &args.ports).await;
    spinner::finish();

    let hosts: Vec<Host> = result.context("nmap scan failed")?;

    if let Some(path) = &args.output {
        info!("Report kept at {}", path.display());
    }

    scan_ends(&hosts, start_time.elapsed(), q_level);
    Ok(())
}

fn scan_ends(hosts: &[Host], total_time: Duration, q_level: u8) {
    if hosts.is_empty() {
        warn!("nmap reported no hosts");
        return;
    }

    print::header("scan results", q_level);
    if q_level < 2 {
        print_hosts(hosts);
    }
    print_summary(hosts, total_time, q_level);
}

fn print_hosts(hosts: &[Host]) {
    for (idx, host) in hosts.iter().enumerate() {
        print_host_tree(host, idx);
        if idx + 1 != hosts.len() {
            print::print("");
        }
    }
}

fn print_host_tree(host: &Host, idx: usize) {
    let title = host
        .hostnames()
        .first()
        .map(|h| h.name())
        .or_else(|| host.addresses().first().map(|a| a.value()))
        .unwrap_or("Unknown host");
    print::tree_head(idx, title);

    let mut details: Vec<Detail> = vec![format::status_to_detail(host.status())];
    details.extend(format::addresses_to_details(host.addresses()));
    details.extend(format::hostnames_to_details(host.hostnames()));
    details.extend(host.ports().iter().map(format::port_to_detail));

    print::as_tree_one_level(details);
}

fn print_summary(hosts: &[Host], total_time: Duration, q_level: u8) {
    let up: usize = hosts.iter().filter(|h| h.status() == "up").count();
    let open: usize = hosts.iter().flat_map(Host::ports).filter(|p| p.is_open()).count();

    let up_hosts: ColoredString = format!("{up}/{} hosts up", hosts.len()).bold().green();
    let open_ports: ColoredString = format!("{open} open ports").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Scan Complete: {up_hosts}, {open_ports} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => info!("{}", output),
    }
}
