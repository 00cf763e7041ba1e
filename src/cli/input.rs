//! User input utilities for interactive CLI prompts
//!
//! Provides the blocking acknowledgment prompt used before long-running
//! operations. Kept out of the core services so the algorithms stay
//! non-interactive and testable.

use crate::{Error, Result};
use std::io::{self, Write};

/// Display a message and wait for the user to press ENTER
pub fn wait_for_acknowledgment(message: &str) -> Result<()> {
    println!("{}", message);
    print!("Press ENTER to continue...");

    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(())
}
