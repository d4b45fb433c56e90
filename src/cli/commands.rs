//! CLI command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use serde::Serialize;

use crate::search::{CommonSubstring, MismatchSearch, SearchConfig, SearchStats};
use crate::symbol::TextUnit;

use super::args::{Cli, OutputFormat, SymbolUnit};

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
struct Report {
    max_mismatches: usize,
    min_length: usize,
    result: Option<CommonSubstring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SearchStats>,
}

/// Run one search as described by the parsed arguments
pub fn execute(cli: &Cli) -> Result<()> {
    let mut builder = SearchConfig::builder()
        .max_mismatches(cli.max_mismatches)
        .min_length(cli.min_length);
    if let Some(limit) = cli.max_expansions {
        builder = builder.max_expansions(limit);
    }
    let config = builder.build().context("Invalid search parameters")?;

    let (result, stats) = match cli.unit {
        SymbolUnit::Char => run_search::<char>(&cli.first, &cli.second, &config),
        SymbolUnit::Byte => run_search::<u8>(&cli.first, &cli.second, &config),
    };
    info!("{:?}", stats);

    let stats = cli.stats.then_some(stats);
    match cli.format {
        OutputFormat::Text => print_text(&config, result, stats),
        OutputFormat::Json => {
            let report = Report {
                max_mismatches: config.max_mismatches(),
                min_length: config.min_length(),
                result,
                stats,
            };
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_search<U: TextUnit>(
    first: &str,
    second: &str,
    config: &SearchConfig,
) -> (Option<CommonSubstring>, SearchStats) {
    let first = U::from_str(first);
    let second = U::from_str(second);
    MismatchSearch::new(&first, &second).run_with_stats(config)
}

fn print_text(
    config: &SearchConfig,
    result: Option<CommonSubstring>,
    stats: Option<SearchStats>,
) {
    match result {
        Some(found) => {
            println!(
                "{} with at most {} mismatches and minimum length {}:",
                "Match".green().bold(),
                config.max_mismatches(),
                config.min_length()
            );
            println!(
                "Length={}, Start in first={}, Start in second={}",
                found.length, found.start_in_first, found.start_in_second
            );
        }
        None => println!(
            "{} common substring of length >= {} found with at most {} mismatches.",
            "No".yellow().bold(),
            config.min_length(),
            config.max_mismatches()
        ),
    }

    if let Some(stats) = stats {
        println!(
            "{} pushed={} popped={} duplicates={} expanded={}{}",
            "Stats:".dimmed(),
            stats.pushed,
            stats.popped,
            stats.duplicates,
            stats.expanded,
            if stats.truncated { " (truncated)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["kmismatch", "abcdefg", "cdxef"]);
        assert_eq!(cli.max_mismatches, 1);
        assert_eq!(cli.min_length, 3);
        assert_eq!(cli.unit, SymbolUnit::Char);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.stats);
    }

    #[test]
    fn test_execute_json() {
        let cli = Cli::parse_from([
            "kmismatch", "aaaa", "aaaa", "-k", "0", "-m", "4", "-f", "json",
        ]);
        assert!(execute(&cli).is_ok());
    }

    #[test]
    fn test_execute_rejects_zero_min_length() {
        let cli = Cli::parse_from(["kmismatch", "a", "a", "-m", "0"]);
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_search_units_differ() {
        let config = SearchConfig::new(0, 1).unwrap();
        let (chars, _) = run_search::<char>("é", "é", &config);
        let (bytes, _) = run_search::<u8>("é", "é", &config);
        assert_eq!(chars.map(|f| f.length), Some(1));
        assert_eq!(bytes.map(|f| f.length), Some(2));
    }
}
