//! GBD CLI - Command line access to the Godavari basin dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gbd-cli",
    version,
    about = "Godavari River Basin data toolkit"
)]
struct Cli {
    #[command(flatten)]
    global: gbd_cmd::GlobalArgs,

    #[command(subcommand)]
    command: gbd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gbd_cmd::run(&cli.global, cli.command)
}
