// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `configs` commands.

use std::io::{self, Write};

use anyhow::Context;

use crate::config::Config;
use crate::error::Result;

/// Prints the effective configuration, one `section.key = value` per line.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_options_command(config: &Config) -> Result<()> {
    write_lines(&mut io::stdout().lock(), &config.format_options())
}

/// Prints the configuration layers in the order they were applied.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_configs_command(sources: &[String]) -> Result<()> {
    write_lines(&mut io::stdout().lock(), sources)
}

pub(crate) fn write_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("failed to write to stdout")?;
    }
    Ok(())
}
