//! CLI interface for kmismatch
//!
//! Runs a single search over two sequences given on the command line.

pub mod args;
pub mod commands;

pub use args::{Cli, OutputFormat, SymbolUnit};
pub use commands::execute;
