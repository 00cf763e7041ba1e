use clap::Parser;
use logsift::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("logsift - Large Log File Splitter and Profiler");
    println!("==============================================");
    println!();
    println!("Stream very large line-oriented log files through frequency");
    println!("aggregators and a batch splitter, then build representative");
    println!("samples from the batch files.");
    println!();
    println!("USAGE:");
    println!("    logsift <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Run the single-pass pipeline over a source log file");
    println!("    sample      Build a fixed-size sample from the batch files");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Split a source log into 200 batch files under batch/:");
    println!("    logsift process source/Windows.log");
    println!();
    println!("    # Split into 50 batches with a custom prefix:");
    println!("    logsift process source/Windows.log --output-prefix out/chunk --batches 50");
    println!();
    println!("    # Build a 100 MiB sample from the batch files:");
    println!("    logsift sample --output sample/sample_100MB.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    logsift <COMMAND> --help");
}
