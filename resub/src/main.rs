// resub/src/main.rs
//! Resub entry point.
//!
//! Parses the command line, initializes logging and runs the replace
//! operation, mapping every failure to the single non-zero exit status.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use resub::cli::Cli;
use resub::commands::replace::{run_replace, ReplaceOptions};
use resub::logger;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage errors share the one failure status with every other
            // error instead of clap's dedicated exit code.
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    logger::init_logger(None);

    let opts = ReplaceOptions {
        pattern: args.pattern,
        text: args.text,
        replacement: args.replacement,
    };

    if let Err(e) = run_replace(&opts) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
