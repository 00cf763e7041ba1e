//! Single-pass pipeline driver
//!
//! Owns the one sequential pass over the source file: reads each line,
//! parses it, dispatches valid records to every registered consumer in
//! registration order, tracks processed/invalid counts, reports coarse
//! progress, and finalises all consumers at end of stream.

pub mod progress;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::app::services::consumers::RecordConsumer;
use crate::app::services::record_parser::parse_record;
use crate::{Error, Result};
use self::progress::{ProgressTracker, create_pipeline_bar};
use tracing::{debug, info};

/// Counters accumulated over one pipeline pass
///
/// Invariant: `processed == invalid + dispatched`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Every line read, valid or not
    pub processed: u64,
    /// Lines that failed to parse (skipped, never dispatched)
    pub invalid: u64,
    /// Valid records dispatched to every consumer
    pub dispatched: u64,
}

/// Drives one pass of the record stream through the registered consumers
pub struct PipelineDriver {
    consumers: Vec<Box<dyn RecordConsumer>>,
    expected_lines: u64,
    progress_intervals: u64,
    show_progress: bool,
}

impl PipelineDriver {
    pub fn new(expected_lines: u64, progress_intervals: u64) -> Self {
        Self {
            consumers: Vec::new(),
            expected_lines,
            progress_intervals,
            show_progress: true,
        }
    }

    /// Enable or disable the console progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Register a consumer; dispatch order is registration order
    pub fn register(&mut self, consumer: Box<dyn RecordConsumer>) {
        self.consumers.push(consumer);
    }

    /// Renderable results of all consumers, in registration order
    pub fn reports(&self) -> Vec<(&'static str, String)> {
        self.consumers
            .iter()
            .map(|c| (c.name(), c.report()))
            .collect()
    }

    /// Run exactly one sequential pass over the source file
    ///
    /// A source file that cannot be opened is fatal. A line that fails to
    /// parse is counted and skipped without touching any consumer; it never
    /// aborts the pass. At end of stream every consumer is finalised in
    /// registration order.
    pub fn run(&mut self, source_path: &Path) -> Result<PipelineStats> {
        let file = File::open(source_path)
            .map_err(|e| Error::source_open(source_path.display().to_string(), e))?;
        let mut reader = BufReader::new(file);

        info!(
            "Starting pass over {} ({} consumers, {} expected lines)",
            source_path.display(),
            self.consumers.len(),
            self.expected_lines
        );

        let mut tracker = ProgressTracker::new(self.expected_lines, self.progress_intervals);
        let bar = self.show_progress.then(|| create_pipeline_bar(self.expected_lines));

        let mut stats = PipelineStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            stats.processed += 1;

            // Bytes are read raw so one malformed line cannot abort the
            // pass; invalid UTF-8 is decoded lossily and the newline is
            // kept, which `raw` must preserve.
            let line = String::from_utf8_lossy(&buf);

            match parse_record(&line) {
                Ok(record) => {
                    for consumer in &mut self.consumers {
                        consumer.consume(&record)?;
                    }
                    stats.dispatched += 1;
                }
                Err(_) => {
                    stats.invalid += 1;
                }
            }

            if tracker.advance(stats.processed).is_some() {
                if let Some(ref bar) = bar {
                    bar.set_position(stats.processed.min(self.expected_lines));
                }
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        for consumer in &mut self.consumers {
            debug!("Finalising consumer '{}'", consumer.name());
            consumer.finalise()?;
        }

        info!(
            "Pass complete: {} processed, {} invalid, {} dispatched",
            stats.processed, stats.invalid, stats.dispatched
        );
        Ok(stats)
    }
}
