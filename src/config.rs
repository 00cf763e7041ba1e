//! Configuration management and validation.
//!
//! Provides the configuration object shared by the pipeline and the sampler:
//! source stream expectations, batch partitioning parameters, progress
//! reporting granularity and sampling targets. Defaults come from
//! [`crate::constants`] and can be overridden from the CLI.

use crate::constants::{
    DEFAULT_BATCH_COUNT, DEFAULT_BATCH_EXTENSION, DEFAULT_BATCH_PREFIX, DEFAULT_BYTES_PER_LINE,
    DEFAULT_EXPECTED_BYTES, DEFAULT_EXPECTED_LINES, DEFAULT_IRREGULAR_BUDGET,
    DEFAULT_PROGRESS_INTERVALS, DEFAULT_SAMPLE_OUTPUT, DEFAULT_SAMPLE_TARGET_BYTES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for a logsift run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Expected number of lines in the source file (progress + batch sizing)
    pub expected_lines: u64,

    /// Expected total source size in bytes
    pub expected_bytes: u64,

    /// Number of batch files to partition the cleaned stream into
    pub batch_count: u64,

    /// Number of coarse progress buckets over the whole pass
    pub progress_intervals: u64,

    /// How many irregular-category records are printed before going quiet
    pub irregular_budget: u64,

    /// Target size of the generated sample file in bytes
    pub sample_target_bytes: u64,

    /// Assumed average bytes per line when converting the sample byte budget
    /// into a line budget
    pub bytes_per_line_estimate: f64,

    /// Path prefix for batch files (`{prefix}_{index}.{ext}`)
    pub batch_prefix: PathBuf,

    /// Extension for batch files
    pub batch_extension: String,

    /// Output path for the sample file
    pub sample_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_lines: DEFAULT_EXPECTED_LINES,
            expected_bytes: DEFAULT_EXPECTED_BYTES,
            batch_count: DEFAULT_BATCH_COUNT,
            progress_intervals: DEFAULT_PROGRESS_INTERVALS,
            irregular_budget: DEFAULT_IRREGULAR_BUDGET,
            sample_target_bytes: DEFAULT_SAMPLE_TARGET_BYTES,
            bytes_per_line_estimate: DEFAULT_BYTES_PER_LINE,
            batch_prefix: PathBuf::from(DEFAULT_BATCH_PREFIX),
            batch_extension: DEFAULT_BATCH_EXTENSION.to_string(),
            sample_output: PathBuf::from(DEFAULT_SAMPLE_OUTPUT),
        }
    }
}

impl Config {
    /// Create configuration with a custom expected line count
    pub fn with_expected_lines(mut self, expected_lines: u64) -> Self {
        self.expected_lines = expected_lines;
        self
    }

    /// Create configuration with a custom batch count
    pub fn with_batch_count(mut self, batch_count: u64) -> Self {
        self.batch_count = batch_count;
        self
    }

    /// Create configuration with a custom irregular-sample budget
    pub fn with_irregular_budget(mut self, irregular_budget: u64) -> Self {
        self.irregular_budget = irregular_budget;
        self
    }

    /// Create configuration with a custom batch file prefix
    pub fn with_batch_prefix(mut self, batch_prefix: impl Into<PathBuf>) -> Self {
        self.batch_prefix = batch_prefix.into();
        self
    }

    /// Create configuration with a custom sample output path
    pub fn with_sample_output(mut self, sample_output: impl Into<PathBuf>) -> Self {
        self.sample_output = sample_output.into();
        self
    }

    /// Create configuration with a custom sample byte target
    pub fn with_sample_target_bytes(mut self, sample_target_bytes: u64) -> Self {
        self.sample_target_bytes = sample_target_bytes;
        self
    }

    /// Create configuration with a custom bytes-per-line estimate
    pub fn with_bytes_per_line_estimate(mut self, bytes_per_line_estimate: f64) -> Self {
        self.bytes_per_line_estimate = bytes_per_line_estimate;
        self
    }

    /// Per-batch-file line capacity: ceiling(expected_lines / batch_count)
    ///
    /// Every batch file except the last is filled to exactly this many lines.
    pub fn batch_capacity(&self) -> u64 {
        self.expected_lines.div_ceil(self.batch_count)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.expected_lines == 0 {
            return Err(Error::configuration(
                "Expected line count must be greater than 0".to_string(),
            ));
        }

        if self.batch_count == 0 {
            return Err(Error::configuration(
                "Batch count must be greater than 0".to_string(),
            ));
        }

        if self.progress_intervals == 0 {
            return Err(Error::configuration(
                "Progress interval count must be greater than 0".to_string(),
            ));
        }

        if self.bytes_per_line_estimate <= 0.0 {
            return Err(Error::configuration(
                "Bytes-per-line estimate must be positive".to_string(),
            ));
        }

        debug!(
            "Configuration validated: {} expected lines, {} batches, capacity {}",
            self.expected_lines,
            self.batch_count,
            self.batch_capacity()
        );

        Ok(())
    }
}
