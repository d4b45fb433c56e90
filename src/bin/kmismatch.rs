//! kmismatch - longest common substring with bounded mismatches
//!
//! Set `RUST_LOG=kmismatch=debug` to trace the search.

use clap::Parser;
use colored::Colorize;
use std::process;

use kmismatch::cli::{self, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = cli::execute(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
