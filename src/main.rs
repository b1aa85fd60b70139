//! Binary entry point for the `winlink` CLI.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use winlink_cli::logging::Logger;
use winlink_cli::{cli, commands, logging};

#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.command.name();
    logging::init_subscriber(args.verbose, command);
    let log = Arc::new(Logger::new(command));

    match args.command {
        cli::Command::Link(opts) => commands::link::run(&args.global, &opts, &log),
        cli::Command::Unlink(opts) => commands::unlink::run(&args.global, &opts, &log),
        cli::Command::Status(opts) => commands::status::run(&args.global, &opts),
        cli::Command::Version => {
            let version = option_env!("WINLINK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("winlink {version}");
            Ok(())
        }
    }
}
