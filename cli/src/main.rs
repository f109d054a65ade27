mod commands;
mod export;
mod terminal;

use commands::{CommandLine, Commands, check, expand};
use ipsift_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(&commands)?;

    let cfg: Config = Config::new(commands.limit)?;

    match &commands.command {
        Commands::Expand { targets, file } => {
            print::banner(commands.no_banner, commands.quiet);
            expand::expand(targets, file.as_deref(), &cfg, &commands)
        }
        Commands::Check { address } => {
            print::header("address check", commands.quiet);
            check::check(address);
            Ok(())
        }
    }
}
