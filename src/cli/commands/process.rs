//! Process command implementation
//!
//! Wires the configuration and the three consumers into a pipeline driver,
//! runs the single pass, and prints each consumer's report plus the run
//! counters.

use crate::app::services::consumers::{BatchWriter, CategoryCounter, VerbCounter};
use crate::app::services::pipeline::PipelineDriver;
use crate::cli::args::ProcessArgs;
use crate::cli::commands::shared::{print_section, setup_logging};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use tracing::info;

/// Run the single-pass pipeline over the source file
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = Config::default()
        .with_expected_lines(args.expected_lines)
        .with_batch_count(args.batches)
        .with_irregular_budget(args.irregular_samples)
        .with_batch_prefix(args.output_prefix.clone());
    config.validate()?;

    prepare_batch_directory(&config)?;

    let capacity = config.batch_capacity();
    info!(
        "Processing {} into {} batches of up to {} lines",
        args.source.display(),
        config.batch_count,
        capacity
    );

    let mut driver = PipelineDriver::new(config.expected_lines, config.progress_intervals)
        .with_progress(args.show_progress());
    driver.register(Box::new(VerbCounter::new()));
    driver.register(Box::new(CategoryCounter::new(config.irregular_budget)));
    driver.register(Box::new(BatchWriter::new(
        config.batch_prefix.clone(),
        config.batch_extension.clone(),
        capacity,
    )));

    let stats = driver.run(&args.source)?;

    for (name, report) in driver.reports() {
        print_section(name, &report);
    }

    println!(
        "\n{} {} lines processed, {} invalid, {} dispatched",
        "Done:".bold(),
        stats.processed,
        stats.invalid,
        stats.dispatched
    );

    Ok(())
}

/// Create the batch output directory if the prefix has a parent
fn prepare_batch_directory(config: &Config) -> Result<()> {
    if let Some(parent) = config.batch_prefix.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create batch directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
            info!("Created batch directory {}", parent.display());
        }
    }
    Ok(())
}
