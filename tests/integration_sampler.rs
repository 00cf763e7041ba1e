//! Integration tests for the batch sampler
//!
//! These tests write synthetic batch files and verify the sampling quotas,
//! verbatim copying, early stop on short batches, idempotence and the
//! failure mode for missing inputs.

use logsift::app::services::sampler::BatchSampler;
use logsift::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `batches` batch files with the given line counts
fn write_batches(dir: &Path, line_counts: &[usize]) {
    for (i, &count) in line_counts.iter().enumerate() {
        let index = i + 1;
        let mut content = String::new();
        for line in 0..count {
            content.push_str(&format!(
                "2016-09-28 04:30:30,Info,CBS,\"batch {} line {}\"\n",
                index, line
            ));
        }
        fs::write(dir.join(format!("log_{}.csv", index)), content).unwrap();
    }
}

fn sampler(dir: &Path, batches: u64, target_bytes: u64, bytes_per_line: f64) -> BatchSampler {
    BatchSampler::new(
        dir.join("log"),
        "csv",
        batches,
        dir.join("sample.csv"),
        target_bytes,
        bytes_per_line,
    )
}

#[test]
fn test_sampler_copies_quota_lines_per_batch_in_order() {
    let dir = TempDir::new().unwrap();
    write_batches(dir.path(), &[5, 5, 5]);

    // 90 bytes at 10 bytes/line over 3 batches: 3 lines per batch
    let sampler = sampler(dir.path(), 3, 90, 10.0);
    assert_eq!(sampler.plan().lines_per_batch, 3);

    let stats = sampler.run().unwrap();
    assert_eq!(stats.batches_read, 3);
    assert_eq!(stats.lines_written, 9);

    let sample = fs::read_to_string(dir.path().join("sample.csv")).unwrap();
    let lines: Vec<&str> = sample.lines().collect();
    assert_eq!(lines.len(), 9);

    // batch-index order, line prefix of each batch
    assert!(lines[0].contains("batch 1 line 0"));
    assert!(lines[2].contains("batch 1 line 2"));
    assert!(lines[3].contains("batch 2 line 0"));
    assert!(lines[8].contains("batch 3 line 2"));
}

#[test]
fn test_sampler_stops_early_on_short_batches() {
    let dir = TempDir::new().unwrap();
    write_batches(dir.path(), &[1, 0, 5]);

    let sampler = sampler(dir.path(), 3, 90, 10.0); // quota 3
    let stats = sampler.run().unwrap();

    // 1 + 0 + 3 lines
    assert_eq!(stats.lines_written, 4);
    assert_eq!(stats.batches_read, 3);
}

#[test]
fn test_sampler_copies_lines_verbatim() {
    let dir = TempDir::new().unwrap();
    // odd formatting that must survive untouched
    let content = "2016-09-28 04:30:30,Info,CBS,\"weird   spacing\"\n\nno,commas,here,\"\"\n";
    fs::write(dir.path().join("log_1.csv"), content).unwrap();

    let sampler = sampler(dir.path(), 1, 100, 10.0); // quota 10 > file length
    sampler.run().unwrap();

    let sample = fs::read_to_string(dir.path().join("sample.csv")).unwrap();
    assert_eq!(sample, content);
}

#[test]
fn test_sampler_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_batches(dir.path(), &[4, 4]);

    let sampler = sampler(dir.path(), 2, 60, 10.0);
    sampler.run().unwrap();
    let first = fs::read(dir.path().join("sample.csv")).unwrap();

    sampler.run().unwrap();
    let second = fs::read(dir.path().join("sample.csv")).unwrap();

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_missing_batch_file_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_batches(dir.path(), &[2]); // only batch 1 of 3 exists

    let sampler = sampler(dir.path(), 3, 90, 10.0);
    let result = sampler.run();
    assert!(matches!(result, Err(Error::BatchRead { .. })));
}

#[test]
fn test_sampler_reports_bytes_written() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("log_1.csv"), "abcd\nefgh\n").unwrap();

    let sampler = sampler(dir.path(), 1, 10, 5.0); // quota 2
    let stats = sampler.run().unwrap();

    assert_eq!(stats.lines_written, 2);
    assert_eq!(stats.bytes_written, 10);
    let written = fs::metadata(dir.path().join("sample.csv")).unwrap().len();
    assert_eq!(written, stats.bytes_written);
}
