//! Logsift Library
//!
//! A Rust library for profiling and splitting very large line-oriented log
//! files (tens of gigabytes, hundreds of millions of records).
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited log lines into structured records
//! - Fanning each record out to independent streaming consumers
//! - Aggregating verb and category-code frequencies over the full stream
//! - Rewriting the cleaned stream into a fixed number of batch files
//! - Drawing a bounded, representative sample back out of the batch files
//! - Comprehensive error handling and progress reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod consumers;
        pub mod pipeline;
        pub mod record_parser;
        pub mod sampler;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::LogRecord;
pub use config::Config;

/// Result type alias for logsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for logsift operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source log file could not be opened
    #[error("Cannot open source file '{path}': {source}")]
    SourceOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Batch output file could not be created
    #[error("Cannot create batch file '{path}': {source}")]
    BatchOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Batch input file expected by the sampler is missing or unreadable
    #[error("Cannot read batch file '{path}': {source}")]
    BatchRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source-open error
    pub fn source_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a batch-open error
    pub fn batch_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::BatchOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a batch-read error
    pub fn batch_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::BatchRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
