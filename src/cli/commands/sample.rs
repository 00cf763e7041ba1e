//! Sample command implementation
//!
//! Plans the per-batch line quota, asks for confirmation, then runs the
//! sampler over the batch files the process command wrote earlier.

use crate::Result;
use crate::app::services::sampler::BatchSampler;
use crate::cli::args::SampleArgs;
use crate::cli::commands::shared::{format_size, print_section, setup_logging};
use crate::cli::input::wait_for_acknowledgment;
use crate::config::Config;

/// Run the batch sampler
pub async fn run_sample(args: SampleArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = Config::default()
        .with_batch_count(args.batches)
        .with_batch_prefix(args.batch_prefix.clone())
        .with_sample_output(args.output.clone())
        .with_sample_target_bytes(args.target_bytes())
        .with_bytes_per_line_estimate(args.bytes_per_line);
    config.validate()?;

    let sampler = BatchSampler::new(
        config.batch_prefix.clone(),
        config.batch_extension.clone(),
        config.batch_count,
        config.sample_output.clone(),
        config.sample_target_bytes,
        config.bytes_per_line_estimate,
    );

    let plan = sampler.plan();
    let summary = format!(
        "Will sample {} lines per batch, {} lines in total (target {}).",
        plan.lines_per_batch,
        plan.total_lines,
        format_size(args.target_bytes())
    );

    if args.yes {
        println!("{}", summary);
    } else {
        wait_for_acknowledgment(&summary)?;
    }

    let stats = sampler.run()?;

    print_section(
        "Sample written",
        &format!(
            "{}: {} lines, {} from {} batches",
            args.output.display(),
            stats.lines_written,
            format_size(stats.bytes_written),
            stats.batches_read
        ),
    );

    Ok(())
}
