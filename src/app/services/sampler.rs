//! Representative sampling from previously written batch files
//!
//! A separate, later-running stage that rebuilds a bounded-size dataset out
//! of the batch files the pipeline produced. Because every batch file is a
//! contiguous slice of the source stream, copying an equal line quota from
//! each batch yields a sample spread evenly across the whole stream.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app::services::consumers::BatchWriter;
use crate::{Error, Result};
use tracing::{debug, info};

/// What a sampling run will do, computed before any file is touched
///
/// Shown to the user for confirmation before writing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    /// Maximum lines copied from each batch file
    pub lines_per_batch: u64,
    /// Upper bound on total sample lines (short batches may yield fewer)
    pub total_lines: u64,
}

/// Counters accumulated over one sampling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Batch files read
    pub batches_read: u64,
    /// Lines copied into the sample file
    pub lines_written: u64,
    /// Bytes copied into the sample file
    pub bytes_written: u64,
}

/// Copies a bounded line prefix of every batch file into one sample file
pub struct BatchSampler {
    batch_prefix: PathBuf,
    batch_extension: String,
    batch_count: u64,
    output_path: PathBuf,
    target_bytes: u64,
    bytes_per_line_estimate: f64,
}

impl BatchSampler {
    pub fn new(
        batch_prefix: impl Into<PathBuf>,
        batch_extension: impl Into<String>,
        batch_count: u64,
        output_path: impl Into<PathBuf>,
        target_bytes: u64,
        bytes_per_line_estimate: f64,
    ) -> Self {
        Self {
            batch_prefix: batch_prefix.into(),
            batch_extension: batch_extension.into(),
            batch_count,
            output_path: output_path.into(),
            target_bytes,
            bytes_per_line_estimate,
        }
    }

    /// Compute the per-batch line quota from the byte budget
    ///
    /// The byte target is converted to a line target with the assumed
    /// average line size, then divided evenly across the batches, rounding
    /// up so the target size is reached rather than undershot.
    pub fn plan(&self) -> SamplePlan {
        let target_lines = self.target_bytes as f64 / self.bytes_per_line_estimate;
        let lines_per_batch = (target_lines / self.batch_count as f64).ceil() as u64;
        SamplePlan {
            lines_per_batch,
            total_lines: lines_per_batch * self.batch_count,
        }
    }

    /// Copy up to the planned quota of lines from every batch file, in
    /// batch-index order, into the single output file
    ///
    /// Lines are copied verbatim, original formatting included. A batch
    /// shorter than the quota contributes all of its lines; a missing batch
    /// file aborts the run. Running twice over identical inputs produces
    /// byte-identical output.
    pub fn run(&self) -> Result<SampleStats> {
        let plan = self.plan();
        info!(
            "Sampling {} lines per batch from {} batches into {}",
            plan.lines_per_batch,
            self.batch_count,
            self.output_path.display()
        );

        let output = File::create(&self.output_path)
            .map_err(|e| Error::io(self.output_path.display().to_string(), e))?;
        let mut writer = BufWriter::new(output);

        let mut stats = SampleStats::default();
        for index in 1..=self.batch_count {
            let path = BatchWriter::batch_path(&self.batch_prefix, &self.batch_extension, index);
            let copied = self.copy_prefix(&path, plan.lines_per_batch, &mut writer, &mut stats)?;
            stats.batches_read += 1;
            debug!("Copied {} lines from {}", copied, path.display());
        }

        writer.flush()?;
        info!(
            "Sample complete: {} lines, {} bytes from {} batches",
            stats.lines_written, stats.bytes_written, stats.batches_read
        );
        Ok(stats)
    }

    /// Copy at most `quota` lines from one batch file, verbatim
    fn copy_prefix(
        &self,
        path: &Path,
        quota: u64,
        writer: &mut BufWriter<File>,
        stats: &mut SampleStats,
    ) -> Result<u64> {
        let file = File::open(path).map_err(|e| Error::batch_read(path.display().to_string(), e))?;
        let mut reader = BufReader::new(file);

        let mut copied = 0;
        let mut line = String::new();
        while copied < quota {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            writer.write_all(line.as_bytes())?;
            copied += 1;
            stats.lines_written += 1;
            stats.bytes_written += line.len() as u64;
        }
        Ok(copied)
    }
}
