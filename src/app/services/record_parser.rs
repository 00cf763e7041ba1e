//! Line-to-record parsing for whitespace-delimited log files
//!
//! This module turns one raw line of text into a [`LogRecord`] or a
//! [`ParseFailure`]. The format is tolerant about token content but strict
//! about token count: anything with fewer than four whitespace-separated
//! tokens is rejected.

use crate::app::models::LogRecord;

/// Minimum number of whitespace-separated tokens a parseable line must have
pub const MIN_TOKENS: usize = 4;

/// Why a line could not be turned into a [`LogRecord`]
///
/// A parse failure is ordinary per-line control flow: the pipeline counts it
/// and moves on. It is deliberately not a [`crate::Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Fewer than [`MIN_TOKENS`] tokens were present
    TooFewTokens { found: usize },
}

/// Parse a single raw log line into a structured record
///
/// A leading byte-order marker is ignored for tokenization. On success the
/// record holds the first two tokens joined as `timestamp`, the third as
/// `severity`, the fourth as `category`, the remainder joined with single
/// spaces as `body`, and the unmodified input (including any trailing
/// newline) as `raw`. Token content is not validated further; malformed but
/// token-count-sufficient lines are the downstream consumers' problem.
pub fn parse_record(raw_line: &str) -> Result<LogRecord, ParseFailure> {
    let tokens: Vec<&str> = raw_line
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect();

    if tokens.len() < MIN_TOKENS {
        return Err(ParseFailure::TooFewTokens {
            found: tokens.len(),
        });
    }

    Ok(LogRecord {
        timestamp: format!("{} {}", tokens[0], tokens[1]),
        severity: tokens[2].to_string(),
        category: tokens[3].to_string(),
        body: tokens[4..].join(" "),
        raw: raw_line.to_string(),
    })
}
