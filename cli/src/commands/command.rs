use nmapr_core::Nmap;
use nmapr_core::executor::SubprocessExecutor;

use super::ScanArgs;
use crate::terminal::print;

/// Prints the command line `scan` would execute, without running it.
pub fn command(args: ScanArgs) -> anyhow::Result<()> {
    let mut nmap = Nmap::new(Box::new(SubprocessExecutor::new()), super::scan::output_file(&args)?);
    nmap.options(args.to_options());

    print::print(&nmap.command(&args.targets, &args.ports).join(" "));
    Ok(())
}
