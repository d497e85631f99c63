// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filtering the process environment.
//!
//! ```text
//! filter_environment(validator, options)
//!        |
//!        v
//! SystemEnv.snapshot()   (re-read on every call)
//!        |
//!        v
//! filter(&snapshot.to_value(), validator, options)
//! ```
//!
//! [`filter`] is re-exported here so arbitrary mappings can be filtered
//! through the same surface.

#[cfg(test)]
mod tests;

use crate::core::env::{ReadEnv, SystemEnv};
use crate::error::FilterResult;
use crate::filter::{FilterOptions, FilteredEnv, Validator};

pub use crate::filter::filter;

/// Filters the live process environment.
///
/// # Errors
///
/// Returns [`FilterError::Syntax`](crate::error::FilterError::Syntax) if
/// `options` ask for JSON parsing and a matching variable holds a malformed
/// JSON object or array.
///
/// # Example
///
/// ```no_run
/// use filter_env_rs::{FilterOptions, Validator, filter_environment};
///
/// let options = FilterOptions::builder().with_json(true).with_freeze(true).build();
/// let config = filter_environment(&Validator::pattern("^APP_")?, &options)?;
/// for (name, value) in config.iter() {
///     println!("{name} = {value}");
/// }
/// # Ok::<(), filter_env_rs::error::FilterError>(())
/// ```
pub fn filter_environment(
    validator: &Validator,
    options: &FilterOptions,
) -> FilterResult<FilteredEnv> {
    filter_environment_from(&SystemEnv, validator, options)
}

/// Filters a snapshot taken from `source`.
///
/// # Errors
///
/// Same as [`filter_environment`].
pub fn filter_environment_from<E>(
    source: &E,
    validator: &Validator,
    options: &FilterOptions,
) -> FilterResult<FilteredEnv>
where
    E: ReadEnv + ?Sized,
{
    let snapshot = source.snapshot();
    tracing::trace!(variables = snapshot.len(), "Captured environment snapshot");
    filter(&snapshot.to_value(), validator, options)
}
