// resub-core/src/lib.rs
//! # Resub Core Library
//!
//! `resub-core` provides the fundamental, platform-independent logic for
//! single-pass regular-expression replacement. It defines the compiled
//! pattern type, the replacement engine that applies it, and the structured
//! errors both can surface.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input data, without concerns for I/O or
//! application-specific state management.
//!
//! ## Modules
//!
//! * `compiler`: Compiles a pattern string into a [`CompiledPattern`].
//! * `replacer`: Implements the cursor-driven replacement scan.
//! * `errors`: Defines the [`ResubError`] enum for clear error reporting.
//!
//! ## Usage Example
//!
//! ```rust
//! use resub_core::replace;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // Replace every run of digits in a single, one-shot call.
//!     let result = replace("[0-9]+", "abc123def456", "#")?;
//!     assert_eq!(result, "abc#def#");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ResubError`], which preserves the matching
//! engine's own diagnostic on compilation failure and reports failed output
//! buffer growth instead of aborting.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod compiler;
pub mod errors;
pub mod replacer;

/// Re-exports the pattern compilation front-end.
pub use compiler::{compile_pattern, CompiledPattern, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ResubError;

/// Re-exports the replacement engine and its one-shot convenience wrapper.
pub use replacer::{replace, Replacer};
