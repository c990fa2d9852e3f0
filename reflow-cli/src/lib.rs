//! Reflow CLI library
//!
//! This library provides the command-line driver for the reflow batch
//! text-cleanup tool: it discovers `.txt` files in the working directory,
//! runs each through the paragraph formatter, and overwrites it in place.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

/// Version string injected at build time, `dev` unless overridden.
pub const APP_VERSION: &str = match option_env!("REFLOW_VERSION") {
    Some(version) => version,
    None => "dev",
};
