//! Core data models for logsift
//!
//! Defines the structured representation of a single log line as it flows
//! through the pipeline.

use std::fmt;

/// A parsed log record
///
/// Immutable value created from one raw source line and discarded after it
/// has been dispatched to every consumer. A record can only be built from a
/// line with at least four whitespace-separated tokens; see
/// [`crate::app::services::record_parser::parse_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// First two tokens of the line joined with a single space
    pub timestamp: String,

    /// Third token, e.g. `Info`, `Warning`, `Error`
    pub severity: String,

    /// Fourth token, expected (but not guaranteed) to be a short alphabetic
    /// code such as `CBS`
    pub category: String,

    /// Remaining tokens joined with single spaces; empty for a 4-token line
    pub body: String,

    /// The original line, byte-for-byte, including any trailing newline
    pub raw: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
