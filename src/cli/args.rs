//! Command-line argument definitions for logsift
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{
    DEFAULT_BATCH_COUNT, DEFAULT_BATCH_PREFIX, DEFAULT_BYTES_PER_LINE, DEFAULT_EXPECTED_LINES,
    DEFAULT_IRREGULAR_BUDGET, DEFAULT_SAMPLE_OUTPUT,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the logsift log processor
///
/// Streams a very large line-oriented log file through frequency aggregators
/// and a batch splitter, and rebuilds representative samples from the
/// resulting batch files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "logsift",
    version,
    about = "Profile and split very large line-oriented log files",
    long_about = "A tool for working with log files too large to hold in memory. \
                  The process command makes a single pass over the source file, \
                  aggregating verb and category-code frequencies and rewriting the \
                  cleaned records into a fixed number of batch files. The sample \
                  command later draws a bounded number of lines from each batch file \
                  to build a representative fixed-size sample dataset."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for logsift
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the single-pass pipeline over a source log file
    Process(ProcessArgs),
    /// Build a fixed-size sample from previously written batch files
    Sample(SampleArgs),
}

/// Arguments for the process command (the single-pass pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Source log file to process
    ///
    /// A text file where each line is whitespace-delimited: two timestamp
    /// tokens, a severity, a category code, and a free-text body. May begin
    /// with a byte-order marker.
    #[arg(value_name = "SOURCE", help = "Path to the source log file")]
    pub source: PathBuf,

    /// Path prefix for batch output files
    ///
    /// Batch files are written as {prefix}_1.csv, {prefix}_2.csv, and so on.
    /// The parent directory is created if it does not exist.
    #[arg(
        short = 'o',
        long = "output-prefix",
        value_name = "PREFIX",
        default_value = DEFAULT_BATCH_PREFIX,
        help = "Path prefix for batch output files"
    )]
    pub output_prefix: PathBuf,

    /// Number of batch files to split the cleaned stream into
    #[arg(
        short = 'b',
        long = "batches",
        value_name = "COUNT",
        default_value_t = DEFAULT_BATCH_COUNT,
        help = "Number of batch files to produce"
    )]
    pub batches: u64,

    /// Expected number of lines in the source file
    ///
    /// Drives progress reporting and the per-batch line capacity. The pass
    /// still completes if the real count differs; only the progress display
    /// and the size of the final batch file are affected.
    #[arg(
        long = "expected-lines",
        value_name = "COUNT",
        default_value_t = DEFAULT_EXPECTED_LINES,
        help = "Expected number of lines in the source file"
    )]
    pub expected_lines: u64,

    /// How many irregular-category records to print before going quiet
    #[arg(
        long = "irregular-samples",
        value_name = "COUNT",
        default_value_t = DEFAULT_IRREGULAR_BUDGET,
        help = "Number of irregular-category records to print"
    )]
    pub irregular_samples: u64,

    /// Disable the console progress bar
    #[arg(long = "no-progress", help = "Disable the progress bar")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the sample command (batch-file sampling)
#[derive(Debug, Clone, Parser)]
pub struct SampleArgs {
    /// Path prefix of the batch files written by the process command
    #[arg(
        short = 'i',
        long = "batch-prefix",
        value_name = "PREFIX",
        default_value = DEFAULT_BATCH_PREFIX,
        help = "Path prefix of the batch input files"
    )]
    pub batch_prefix: PathBuf,

    /// Number of batch files to sample from
    #[arg(
        short = 'b',
        long = "batches",
        value_name = "COUNT",
        default_value_t = DEFAULT_BATCH_COUNT,
        help = "Number of batch files to sample from"
    )]
    pub batches: u64,

    /// Output path for the sample file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_SAMPLE_OUTPUT,
        help = "Output path for the sample file"
    )]
    pub output: PathBuf,

    /// Target sample size in mebibytes
    #[arg(
        short = 's',
        long = "size-mb",
        value_name = "MB",
        default_value_t = 100,
        help = "Target sample size in MiB"
    )]
    pub size_mb: u64,

    /// Assumed average bytes per line
    #[arg(
        long = "bytes-per-line",
        value_name = "BYTES",
        default_value_t = DEFAULT_BYTES_PER_LINE,
        help = "Assumed average bytes per line"
    )]
    pub bytes_per_line: f64,

    /// Skip the interactive confirmation prompt
    #[arg(short = 'y', long = "yes", help = "Write without asking for confirmation")]
    pub yes: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.source.exists() {
            return Err(Error::configuration(format!(
                "Source file does not exist: {}",
                self.source.display()
            )));
        }

        if self.source.is_dir() {
            return Err(Error::configuration(format!(
                "Source path is a directory, not a file: {}",
                self.source.display()
            )));
        }

        if self.batches == 0 {
            return Err(Error::configuration(
                "Number of batches must be greater than 0".to_string(),
            ));
        }

        if self.expected_lines == 0 {
            return Err(Error::configuration(
                "Expected line count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl SampleArgs {
    /// Validate the sample command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.batches == 0 {
            return Err(Error::configuration(
                "Number of batches must be greater than 0".to_string(),
            ));
        }

        if self.size_mb == 0 {
            return Err(Error::configuration(
                "Sample size must be greater than 0 MiB".to_string(),
            ));
        }

        if self.bytes_per_line <= 0.0 {
            return Err(Error::configuration(
                "Bytes-per-line estimate must be positive".to_string(),
            ));
        }

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Target sample size in bytes
    pub fn target_bytes(&self) -> u64 {
        self.size_mb * 1024 * 1024
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn process_args(source: PathBuf) -> ProcessArgs {
        ProcessArgs {
            source,
            output_prefix: PathBuf::from("batch/log"),
            batches: 200,
            expected_lines: 1000,
            irregular_samples: 0,
            no_progress: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_process_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.log");
        fs::write(&source, "x\n").unwrap();

        let args = process_args(source.clone());
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.batches = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.expected_lines = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.source = temp_dir.path().join("missing.log");
        assert!(invalid.validate().is_err());

        let mut invalid = args;
        invalid.source = temp_dir.path().to_path_buf();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_process_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.log");
        fs::write(&source, "x\n").unwrap();

        let mut args = process_args(source);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.log");
        fs::write(&source, "x\n").unwrap();

        let mut args = process_args(source);
        assert!(args.show_progress());

        args.no_progress = true;
        assert!(!args.show_progress());

        args.no_progress = false;
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_sample_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = SampleArgs {
            batch_prefix: temp_dir.path().join("log"),
            batches: 10,
            output: temp_dir.path().join("sample.csv"),
            size_mb: 100,
            bytes_per_line: 244.5,
            yes: false,
            verbose: 0,
        };
        assert!(args.validate().is_ok());
        assert_eq!(args.target_bytes(), 100 * 1024 * 1024);

        let mut invalid = args.clone();
        invalid.batches = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.size_mb = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.bytes_per_line = 0.0;
        assert!(invalid.validate().is_err());

        let mut invalid = args;
        invalid.output = temp_dir.path().join("nope/sample.csv");
        assert!(invalid.validate().is_err());
    }
}
