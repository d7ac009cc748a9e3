//! Word-ladder command
//!
//! `stride ladder <BEGIN> <END> --words <FILE>` - find a shortest
//! transformation sequence between two words through the dictionary. An
//! empty result ("No ladder found.") is not an error.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use stride_core::error::Result;
use stride_core::ladder::{self, find_ladder};

#[derive(Debug, Serialize)]
struct LadderReport {
    begin: String,
    end: String,
    found: bool,
    /// Number of words in the ladder, endpoints included
    length: usize,
    ladder: Vec<String>,
}

pub fn execute(cli: &Cli, begin: &str, end: &str, words_file: &Path, start: Instant) -> Result<()> {
    let vocabulary = ladder::read_words(words_file)?;
    tracing::debug!(elapsed = ?start.elapsed(), words = vocabulary.len(), "load_words");

    let rungs = find_ladder(begin, end, &vocabulary);
    tracing::debug!(elapsed = ?start.elapsed(), length = rungs.len(), "find_ladder");

    let report = LadderReport {
        begin: begin.to_lowercase(),
        end: end.to_lowercase(),
        found: !rungs.is_empty(),
        length: rungs.len(),
        ladder: rungs,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(&report),
    }

    Ok(())
}

fn print_human(report: &LadderReport) {
    if report.ladder.is_empty() {
        println!("No ladder found.");
    } else {
        println!("{}", report.ladder.join(" -> "));
    }
}
