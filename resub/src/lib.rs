// resub/src/lib.rs
//! # Resub CLI Application
//!
//! This crate provides the command-line interface for the resub replacement
//! engine. All replacement logic lives in `resub-core`; this crate only
//! parses arguments, bootstraps logging and routes the result and any
//! diagnostics to the right stream.

pub mod cli;
pub mod commands;
pub mod logger;
