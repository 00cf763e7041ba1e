//! Application constants for logsift
//!
//! This module contains all configuration defaults and fixed values used
//! throughout the application. The line/byte figures come from profiling the
//! reference dataset the tool was built against.

// =============================================================================
// Source Stream Expectations
// =============================================================================

/// Expected number of lines in the source log file
///
/// Measured once on the reference dataset; used for progress reporting and
/// for sizing the per-batch line capacity.
pub const DEFAULT_EXPECTED_LINES: u64 = 114_608_388;

/// Expected total size of the source log file in bytes
pub const DEFAULT_EXPECTED_BYTES: u64 = 28_012_696_901;

/// Average bytes per line observed in the reference dataset
pub const DEFAULT_BYTES_PER_LINE: f64 = 244.5;

// =============================================================================
// Batching
// =============================================================================

/// Number of batch files the cleaned stream is partitioned into
pub const DEFAULT_BATCH_COUNT: u64 = 200;

/// Default path prefix for batch files (`{prefix}_{index}.{ext}`)
pub const DEFAULT_BATCH_PREFIX: &str = "batch/log";

/// Default extension for batch files
pub const DEFAULT_BATCH_EXTENSION: &str = "csv";

// =============================================================================
// Progress Reporting
// =============================================================================

/// Number of coarse progress buckets over the whole pass
///
/// The progress bar is only redrawn when the pass crosses into a new bucket,
/// so at most this many redraws happen regardless of line count.
pub const DEFAULT_PROGRESS_INTERVALS: u64 = 1000;

/// Width of the rendered progress bar in characters
pub const PROGRESS_BAR_WIDTH: u64 = 50;

// =============================================================================
// Data Quality
// =============================================================================

/// How many irregular-category records are printed before going quiet
pub const DEFAULT_IRREGULAR_BUDGET: u64 = 0;

/// Expected length of a regular category code
pub const CATEGORY_CODE_LEN: usize = 3;

/// Sentinel verb reported when a body contains no recognizable verb
pub const NO_VERB_SENTINEL: &str = "__NO_VERB_FOUND";

// =============================================================================
// Sampling
// =============================================================================

/// Target size of the generated sample file in bytes (100 MiB)
pub const DEFAULT_SAMPLE_TARGET_BYTES: u64 = 100 * 1024 * 1024;

/// Default output path for the sample file
pub const DEFAULT_SAMPLE_OUTPUT: &str = "sample/sample_100MB.csv";
