mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Today(args) => commands::today(args),
        Command::Convert(args) => commands::convert(args),
        Command::Age(args) => commands::age(args),
        Command::Phase(args) => commands::phase(args),
        Command::Grid(args) => commands::grid(args),
    }
}
