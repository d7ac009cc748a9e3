//! Command dispatch logic for stride

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use stride_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Paths { graph, source, to } => {
            commands::paths::execute(cli, graph, *source, *to, start)
        }
        Commands::Ladder { begin, end, words } => {
            commands::ladder::execute(cli, begin, end, words, start)
        }
    }
}
