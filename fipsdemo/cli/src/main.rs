use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use self::cli::Cli;

fn main() -> Result<ExitCode> {
    Cli::parse().run()
}
