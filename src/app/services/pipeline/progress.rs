//! Progress tracking for the single-pass pipeline
//!
//! The source file has hundreds of millions of lines, so redrawing a
//! progress bar per line would dominate the run. Progress is instead
//! quantised into a fixed number of buckets; the bar is only redrawn when
//! the pass crosses into a new bucket, which caps the number of redraws at
//! the interval count regardless of line count.

use crate::constants::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Quantises a monotonically increasing line counter into coarse buckets
///
/// `advance` reports a bucket at most once, and the reported bucket never
/// decreases; the caller only redraws when `advance` returns `Some`.
#[derive(Debug)]
pub struct ProgressTracker {
    expected_lines: u64,
    intervals: u64,
    last_bucket: u64,
}

impl ProgressTracker {
    pub fn new(expected_lines: u64, intervals: u64) -> Self {
        Self {
            expected_lines,
            intervals,
            last_bucket: 0,
        }
    }

    /// Bucket for a processed-line count, clamped to the final bucket when
    /// the source turns out longer than expected
    pub fn bucket_for(&self, processed: u64) -> u64 {
        let bucket = processed.saturating_mul(self.intervals) / self.expected_lines.max(1);
        bucket.min(self.intervals)
    }

    /// Record a new processed-line count
    ///
    /// Returns the newly reached bucket the first time that bucket is seen,
    /// `None` otherwise.
    pub fn advance(&mut self, processed: u64) -> Option<u64> {
        let bucket = self.bucket_for(processed);
        if bucket > self.last_bucket {
            self.last_bucket = bucket;
            Some(bucket)
        } else {
            None
        }
    }

    /// The most recently reported bucket
    pub fn last_bucket(&self) -> u64 {
        self.last_bucket
    }
}

/// Create the fixed-width pipeline progress bar
///
/// Rendered on stderr (indicatif's default) so stdout stays clean for
/// data-quality output.
pub fn create_pipeline_bar(expected_lines: u64) -> ProgressBar {
    let pb = ProgressBar::new(expected_lines);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!("[{{bar:{}}}] {{pos}}/{{len}}", PROGRESS_BAR_WIDTH))
            .expect("static progress template is valid")
            .progress_chars("## "),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_advance_with_processed_count() {
        let mut tracker = ProgressTracker::new(1000, 10);

        assert_eq!(tracker.advance(50), None); // still bucket 0
        assert_eq!(tracker.advance(100), Some(1));
        assert_eq!(tracker.advance(250), Some(2));
        assert_eq!(tracker.advance(1000), Some(10));
    }

    #[test]
    fn test_each_bucket_reported_at_most_once() {
        let mut tracker = ProgressTracker::new(100, 10);

        let mut reported = Vec::new();
        for processed in 1..=100 {
            if let Some(bucket) = tracker.advance(processed) {
                reported.push(bucket);
            }
        }

        assert_eq!(reported, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_buckets_never_go_backward() {
        let mut tracker = ProgressTracker::new(1000, 10);

        let mut last = 0;
        for processed in [10, 500, 123, 600, 999, 1000] {
            let bucket = tracker.bucket_for(processed);
            tracker.advance(processed);
            assert!(tracker.last_bucket() >= last);
            assert!(tracker.last_bucket() >= bucket.min(last));
            last = tracker.last_bucket();
        }
        assert_eq!(tracker.last_bucket(), 10);
    }

    #[test]
    fn test_overrun_clamps_to_final_bucket() {
        let mut tracker = ProgressTracker::new(100, 10);
        assert_eq!(tracker.advance(250), Some(10));
        assert_eq!(tracker.advance(10_000), None);
    }

    #[test]
    fn test_zero_expected_lines_does_not_panic() {
        let mut tracker = ProgressTracker::new(0, 10);
        assert_eq!(tracker.advance(5), Some(10));
    }
}
