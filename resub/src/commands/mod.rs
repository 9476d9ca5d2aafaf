// resub/src/commands/mod.rs
//! Command implementations for the resub CLI.

pub mod replace;
