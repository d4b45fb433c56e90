//! CLI argument definitions

use clap::{Parser, ValueEnum};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "kmismatch")]
#[command(about = "Longest common substring with at most k mismatches")]
#[command(version)]
pub struct Cli {
    /// First sequence
    pub first: String,

    /// Second sequence
    pub second: String,

    /// Maximum number of mismatches
    #[arg(short = 'k', long = "mismatches", default_value = "1")]
    pub max_mismatches: usize,

    /// Minimum match length
    #[arg(short = 'm', long, default_value = "3")]
    pub min_length: usize,

    /// Stop after this many node expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Symbol granularity
    #[arg(short, long, default_value = "char")]
    pub unit: SymbolUnit,

    /// Output format
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Print search counters
    #[arg(short = 's', long)]
    pub stats: bool,
}

/// How input strings are split into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolUnit {
    /// Unicode scalar values
    Char,
    /// UTF-8 bytes
    Byte,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sentence
    Text,
    /// JSON object
    Json,
}
