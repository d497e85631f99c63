// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! filter-env [global options] <command>
//! env [PATTERN]          filter the process environment
//! file <PATH> [PATTERN]  filter a JSON document
//! options                show effective configuration
//! configs                list configuration layers in priority order
//! version
//! ```

pub mod filter;
pub mod global;


use crate::cli::filter::{FileArgs, FilterArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Filter environment variables by key pattern.
#[derive(Debug, Parser)]
#[command(
    name = "filter-env",
    author,
    version,
    about = "Filter environment variables by key pattern",
    long_about = "Filters environment variables (or any JSON object) down to the keys\n\
                  matching a pattern, optionally parsing values as JSON and renaming\n\
                  keys.\n\n\
                  Patterns are regular expressions, either bare (`^APP_`) or as a\n\
                  slash-delimited literal with flags (`/^app_/i`).",
    after_help = "CONFIG FILES:\n\n\
                  filter-env reads `filter-env.toml` from the current directory when\n\
                  present, then every file given with --config, in order. Variables\n\
                  named FILTER_ENV_<SECTION>__<KEY> override file values, and command\n\
                  line flags override everything. Use --no-default-config to skip\n\
                  `filter-env.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values from the configuration.
    Options,

    /// Lists configuration layers in priority order.
    Configs,

    /// Filters the process environment.
    Env(FilterArgs),

    /// Filters the top-level keys of a JSON document.
    File(FileArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
