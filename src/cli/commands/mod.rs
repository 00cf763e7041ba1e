//! Command implementations for the logsift CLI
//!
//! This module contains the main command execution logic, logging setup and
//! summary reporting for the CLI interface. Each command is implemented in
//! its own module.

pub mod process;
pub mod sample;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for logsift
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: single-pass pipeline with frequency aggregation and batching
/// - `sample`: bounded per-batch sampling into one output file
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Sample(sample_args) => sample::run_sample(sample_args).await,
    }
}
