pub mod command;
pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use nmapr_common::config::{DEFAULT_EXECUTABLE, ScanOptions};

#[derive(Parser)]
#[command(name = "nmapr")]
#[command(about = "Runs nmap and renders its report.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq prints only the summary)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan targets and print the discovered hosts
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Print the nmap command line a scan would run
    #[command(alias = "c")]
    Command(ScanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Hosts, ranges or networks, passed to nmap as given
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Ports or port ranges (comma separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub ports: Vec<String>,

    /// Enable OS detection (-O)
    #[arg(short = 'O', long)]
    pub os_detection: bool,

    /// Detect service and version info on open ports (-sV)
    #[arg(long)]
    pub service_info: bool,

    /// Make nmap itself verbose (-v)
    #[arg(long)]
    pub verbose_scan: bool,

    /// Host discovery only, no port scan (-sn)
    #[arg(long)]
    pub no_port_scan: bool,

    /// Never resolve DNS (-n)
    #[arg(short, long)]
    pub no_dns: bool,

    /// Treat all hosts as online (-Pn)
    #[arg(long)]
    pub assume_up: bool,

    /// Seconds before nmap is killed
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Name or path of the nmap binary
    #[arg(long = "nmap", default_value = DEFAULT_EXECUTABLE)]
    pub executable: String,

    /// Keep the XML report at this path instead of a temporary file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ScanArgs {
    pub fn to_options(&self) -> ScanOptions {
        ScanOptions {
            os_detection: self.os_detection,
            service_info: self.service_info,
            verbose: self.verbose_scan,
            disable_port_scan: self.no_port_scan,
            disable_reverse_dns: self.no_dns,
            treat_hosts_as_online: self.assume_up,
            executable: self.executable.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
