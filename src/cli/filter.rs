// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filter command arguments.
//!
//! Every flag is optional; unset flags fall back to the `[filter]` section of
//! the configuration.

use clap::Args;
use std::path::PathBuf;

use crate::config::types::{FilterConfig, OutputFormat};

/// Arguments shared by `env` and `file`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Key pattern: `^APP_` or `/^app_/i`.
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Parse values as JSON.
    #[arg(short = 'j', long, overrides_with = "no_json")]
    pub json: bool,

    /// Keep values as raw strings, even when `[filter] json = true`.
    #[arg(long, overrides_with = "json")]
    pub no_json: bool,

    /// Freeze the result before printing.
    #[arg(long, overrides_with = "no_freeze")]
    pub freeze: bool,

    /// Do not freeze, even when `[filter] freeze = true`.
    #[arg(long, overrides_with = "freeze")]
    pub no_freeze: bool,

    /// Key transform, applied in order: strip_prefix:P, strip_suffix:S,
    /// replace:FROM=TO, lowercase, uppercase, camel_case.
    #[arg(short = 'f', long = "format", value_name = "SPEC", action = clap::ArgAction::Append)]
    pub format: Vec<String>,

    /// Output format.
    #[arg(short = 'o', long = "output", value_enum)]
    pub output: Option<OutputFormat>,
}

impl FilterArgs {
    /// Layers these arguments over the configured defaults.
    #[must_use]
    pub fn merge_into(&self, base: &FilterConfig) -> FilterConfig {
        FilterConfig {
            pattern: self.pattern.clone().or_else(|| base.pattern.clone()),
            json: switch(self.json, self.no_json, base.json),
            freeze: switch(self.freeze, self.no_freeze, base.freeze),
            format: if self.format.is_empty() {
                base.format.clone()
            } else {
                self.format.clone()
            },
            output: self.output.unwrap_or(base.output),
        }
    }
}

/// `--flag` / `--no-flag` pair over a configured default; the later flag wins
/// on the command line.
const fn switch(on: bool, off: bool, base: bool) -> bool {
    if off { false } else { on || base }
}

/// Arguments for the `file` command.
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// JSON document whose top-level keys are filtered.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}
