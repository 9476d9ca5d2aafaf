// resub/src/logger.rs
//! Logger bootstrap for the resub binary.
//!
//! Diagnostics travel through the `log` facade and land on stderr. The
//! level comes from `RUST_LOG` and defaults to warnings, so a normal run
//! prints nothing but the result.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// Passing `Some(level)` forces that level regardless of the environment;
/// `None` defers to `RUST_LOG` with a warn default. Initializing more than
/// once is a no-op, which keeps in-process tests from panicking.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
