mod cli;
mod config;
mod convert;
mod hebrew_date_cmd;
mod logging;
mod olim_cmd;
mod parasha_cmd;
mod yahrzeit_cmd;

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
        Command::Olim(args) => olim_cmd::run(args),
        Command::Parasha(args) => parasha_cmd::run(args),
        Command::HebrewDate(args) => hebrew_date_cmd::run(args),
        Command::Yahrzeit(args) => yahrzeit_cmd::run(args),
    }
}
