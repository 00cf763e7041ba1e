//! Batch file rotation and CSV-like rewriting
//!
//! Rewrites the cleaned record stream into a fixed number of roughly
//! equal-sized batch files named `{prefix}_{index}.{ext}` with a 1-based
//! index. Each file holds an unbroken contiguous run of records in source
//! order; together the files form an order-preserving partition of the
//! valid stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::RecordConsumer;
use crate::app::models::LogRecord;
use crate::{Error, Result};
use tracing::debug;

/// Rotating writer that partitions the record stream into batch files
///
/// The current file is opened lazily on the first record and rotated once it
/// reaches the configured line capacity. A rotated-out file gets a single
/// trailing blank line as its terminator; the last file, closed by
/// [`RecordConsumer::finalise`], does not. Downstream tooling relies on that
/// asymmetry, so it is part of the contract here.
pub struct BatchWriter {
    prefix: PathBuf,
    extension: String,
    capacity: u64,
    index: u64,
    files_opened: u64,
    lines_in_current: u64,
    current: Option<BufWriter<File>>,
}

impl BatchWriter {
    /// Create a writer with the given file naming scheme and per-file line
    /// capacity
    pub fn new(prefix: impl Into<PathBuf>, extension: impl Into<String>, capacity: u64) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
            capacity,
            index: 1,
            files_opened: 0,
            lines_in_current: 0,
            current: None,
        }
    }

    /// Path of the batch file with the given 1-based index
    pub fn batch_path(prefix: &Path, extension: &str, index: u64) -> PathBuf {
        let mut name = prefix.as_os_str().to_os_string();
        name.push(format!("_{}.{}", index, extension));
        PathBuf::from(name)
    }

    /// Index of the batch file currently being written (1-based)
    pub fn current_index(&self) -> u64 {
        self.index
    }

    fn open_current(&mut self) -> Result<()> {
        let path = Self::batch_path(&self.prefix, &self.extension, self.index);
        let file =
            File::create(&path).map_err(|e| Error::batch_open(path.display().to_string(), e))?;
        debug!("Opened batch file {}", path.display());
        self.current = Some(BufWriter::new(file));
        self.files_opened += 1;
        self.lines_in_current = 0;
        Ok(())
    }

    /// Terminate and close the full current file, then open the next one
    fn rotate(&mut self) -> Result<()> {
        if let Some(mut writer) = self.current.take() {
            writer.write_all(b"\n")?;
            writer.flush()?;
            self.index += 1;
        }
        self.open_current()
    }
}

impl RecordConsumer for BatchWriter {
    fn name(&self) -> &'static str {
        "Batching"
    }

    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        if self.current.is_none() {
            self.open_current()?;
        } else if self.lines_in_current >= self.capacity {
            self.rotate()?;
        }

        let clean_body = record.body.replace('"', "");
        let writer = self.current.as_mut().expect("batch file is open");
        writeln!(
            writer,
            "{},{},{},\"{}\"",
            record.timestamp.trim_end_matches(','),
            record.severity,
            record.category,
            clean_body
        )?;
        self.lines_in_current += 1;
        Ok(())
    }

    fn finalise(&mut self) -> Result<()> {
        // Closes without the blank-line terminator that rotation writes.
        if let Some(mut writer) = self.current.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn report(&self) -> String {
        // Counts files actually created, not the naming index; an empty
        // stream never opens a file and reports zero.
        format!("Batched data into {} files", self.files_opened)
    }
}
