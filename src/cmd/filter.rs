// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `env` and `file` commands.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::info;

use crate::cli::filter::{FileArgs, FilterArgs};
use crate::cmd::output::render;
use crate::config::Config;
use crate::config::types::FilterConfig;
use crate::environment::{filter, filter_environment};
use crate::error::{FilterError, Result};
use crate::filter::FilteredEnv;

/// Filters the process environment and prints the result.
///
/// # Errors
///
/// Returns an error if no usable pattern is given, if a value is malformed
/// JSON while `--json` is set, or if rendering fails.
pub fn run_env_command(args: &FilterArgs, config: &Config) -> Result<()> {
    let request = args.merge_into(&config.filter);
    let filtered = filter_environment(&request.validator()?, &request.options())?;
    info!(entries = filtered.len(), "Filtered process environment");
    print_filtered(&filtered, &request)
}

/// Filters the top-level keys of a JSON document and prints the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not JSON, if the
/// document is not an object or array, or for the same reasons as
/// [`run_env_command`].
pub fn run_file_command(args: &FileArgs, config: &Config) -> Result<()> {
    let source = read_document(&args.path)?;
    let request = args.filter.merge_into(&config.filter);
    let validator = request.validator()?;
    let filtered = filter(&source, &validator, &request.options())
        .with_context(|| format!("failed to filter {}", args.path.display()))?;
    info!(
        path = %args.path.display(),
        entries = filtered.len(),
        "Filtered document"
    );
    print_filtered(&filtered, &request)
}

/// Reads a JSON document to filter from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain JSON, and
/// [`FilterError::InvalidEnvironment`] if the document is neither an object
/// nor an array.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    if !(document.is_object() || document.is_array()) {
        return Err(FilterError::InvalidEnvironment)
            .with_context(|| format!("{} is not a JSON object or array", path.display()));
    }
    Ok(document)
}

fn print_filtered(filtered: &FilteredEnv, request: &FilterConfig) -> Result<()> {
    let rendered = render(filtered, request.output)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
