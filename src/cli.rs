//! CLI argument parsing for stride
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use stride_core::format::OutputFormat;

/// Stride - shortest-path and word-ladder search
#[derive(Parser, Debug)]
#[command(name = "stride")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute single-source shortest paths over a weighted graph file
    Paths {
        /// Graph description file (vertex count, then `from to weight` triples)
        graph: PathBuf,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,

        /// Report only the path to this vertex
        #[arg(long)]
        to: Option<usize>,
    },

    /// Find a shortest word ladder between two words
    Ladder {
        /// Start word
        begin: String,

        /// Target word
        end: String,

        /// Dictionary file (whitespace-delimited words)
        #[arg(long, short)]
        words: PathBuf,
    },
}

/// Parse output format from string
///
/// `OutputFormat` lives in stride-core, so clap binds to it through its
/// `FromStr` impl rather than `ValueEnum`.
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["stride", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_cli_version() {
        // Should not panic
        let result = Cli::try_parse_from(["stride", "--version"]);
        assert!(result.is_err()); // --version exits
    }

    #[test]
    fn test_parse_paths() {
        let cli = Cli::try_parse_from(["stride", "paths", "graph.txt"]).unwrap();
        if let Commands::Paths { graph, source, to } = cli.command {
            assert_eq!(graph, PathBuf::from("graph.txt"));
            assert_eq!(source, 0);
            assert_eq!(to, None);
        } else {
            panic!("Expected Paths command");
        }
    }

    #[test]
    fn test_parse_paths_with_options() {
        let cli =
            Cli::try_parse_from(["stride", "paths", "graph.txt", "--source", "2", "--to", "5"])
                .unwrap();
        if let Commands::Paths { source, to, .. } = cli.command {
            assert_eq!(source, 2);
            assert_eq!(to, Some(5));
        } else {
            panic!("Expected Paths command");
        }
    }

    #[test]
    fn test_parse_ladder() {
        let cli =
            Cli::try_parse_from(["stride", "ladder", "cat", "dog", "--words", "words.txt"])
                .unwrap();
        if let Commands::Ladder { begin, end, words } = cli.command {
            assert_eq!(begin, "cat");
            assert_eq!(end, "dog");
            assert_eq!(words, PathBuf::from("words.txt"));
        } else {
            panic!("Expected Ladder command");
        }
    }

    #[test]
    fn test_ladder_requires_words() {
        let result = Cli::try_parse_from(["stride", "ladder", "cat", "dog"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["stride", "--format", "json", "paths", "g.txt"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_format_default_is_human() {
        let cli = Cli::try_parse_from(["stride", "paths", "g.txt"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_format_rejects_unknown() {
        let err =
            Cli::try_parse_from(["stride", "--format", "records", "paths", "g.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
