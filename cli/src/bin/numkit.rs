use clap::Parser;
use numkit_cli::{command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let Cli { command } = Cli::parse();
    command::handle_command(command)
}
