//! blockcut CLI
//!
//! Removes a marker-delimited block of lines from a single file.

mod cli;
mod error;
mod logging;
mod remove;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns whether a block was found.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let outcome = remove::run_remove(&cli)?;
    println!("{}", outcome.status_line());

    Ok(outcome.is_success())
}
