//! Replace command implementation, the one operation resub performs.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};

use resub_core::Replacer;

/// Options for the run_replace API.
pub struct ReplaceOptions {
    pub pattern: String,
    pub text: String,
    pub replacement: String,
}

/// The main operation runner for the resub CLI.
///
/// Compiles the pattern, runs the replacement and writes the result to
/// stdout followed by a newline. Every failure propagates to the caller;
/// nothing is written to stdout on an error path.
pub fn run_replace(opts: &ReplaceOptions) -> Result<()> {
    info!("Starting replace operation.");

    let replacer = Replacer::new(&opts.pattern)?;
    let result = replacer
        .replace(&opts.text, &opts.replacement)
        .context("Replacement failed")?;

    debug!(
        "Content replaced. Original length: {}, result length: {}",
        opts.text.len(),
        result.len()
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", result).context("Failed to write result to stdout")?;

    info!("Replace operation completed.");
    Ok(())
}
