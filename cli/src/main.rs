mod commands;
mod terminal;

use commands::{CommandLine, Commands, command, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.no_banner, commands.quiet);

    match commands.command {
        Commands::Scan(args) => {
            print::header("starting nmap", commands.quiet);
            scan::scan(args, commands.quiet).await
        }
        Commands::Command(args) => command::command(args),
    }
}
