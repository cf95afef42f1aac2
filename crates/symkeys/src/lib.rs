//! # symkeys
//!
//! **CLI Binary**
//!
//! Entry point for the `symkeys` command-line application. It loads the
//! vendor shortcut table, drives the builder, and writes or renders the
//! normalized document.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `symkeys.toml`
//! * Install logging
//! * Dispatch commands and turn failures into hinted error messages
//!
//! Normalization and rendering live in the library crates.

#![forbid(unsafe_code)]

mod commands;
mod config;
mod error_hints;
mod logging;
mod source;

use anyhow::Result;
use clap::Parser;
use symkeys_config::Cli;

/// Parse arguments from the process environment and run the command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    let config = config::load_config(cli.global.config.as_deref())?;
    commands::dispatch(cli, &config)
}

/// Render an error chain followed by any hints that apply to it.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
