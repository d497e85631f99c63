// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filtering a source mapping down to accepted entries.
//!
//! # Pipeline
//!
//! ```text
//! source (object | array) ---- otherwise --> InvalidEnvironment
//!    |
//!    v  for each key, in source order
//! validator.test(key) ------ false ------> skip
//!    |
//!    v
//! name = format(key) ------- empty ------> skip
//!    |                ------ taken ------> skip (first wins)
//!    v
//! value = json ? parse_value(raw) : raw
//!    |                ------ None -------> skip
//!    |                ------ Err  -------> abort whole call
//!    v
//! result[name] = value
//!    |
//!    v
//! freeze ? result.freeze()
//! ```

pub mod json;
pub mod options;
pub mod result;
pub mod validator;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde_json::Value;
use tracing::trace;

use crate::error::{FilterError, FilterResult};

pub use options::{FilterOptions, Formatter, KeyFormat, KeyTransform};
pub use result::FilteredEnv;
pub use validator::Validator;

/// Filters `source` down to the entries whose keys `validator` accepts.
///
/// Objects are walked in insertion order; arrays are walked by index, with
/// the index as the key. Accepted keys are renamed through the options'
/// [`KeyFormat`]; when two keys format to the same name only the first is
/// kept. With `json` set, values go through [`json::parse_value`]. With
/// `freeze` set, the returned mapping rejects further mutation.
///
/// # Errors
///
/// - [`FilterError::InvalidEnvironment`] if `source` is not an object or array.
/// - [`FilterError::Syntax`] if `json` is set and a value that looks like a
///   JSON object or array is malformed. Nothing is returned in that case.
///
/// # Example
///
/// ```
/// use filter_env_rs::filter::{FilterOptions, Validator, filter};
/// use serde_json::json;
///
/// let source = json!({ "APP_PORT": "8080", "HOME": "/root" });
/// let validator = Validator::pattern("/^app_/i")?;
/// let options = FilterOptions::builder().with_json(true).build();
///
/// let filtered = filter(&source, &validator, &options)?;
/// assert_eq!(filtered.get("APP_PORT"), Some(&json!(8080)));
/// assert!(!filtered.contains_key("HOME"));
/// # Ok::<(), filter_env_rs::error::FilterError>(())
/// ```
pub fn filter(
    source: &Value,
    validator: &Validator,
    options: &FilterOptions,
) -> FilterResult<FilteredEnv> {
    let entries = source_entries(source)?;
    let source_len = entries.len();
    let mut result = FilteredEnv::new();

    for (key, raw) in entries {
        if !validator.test(&key) {
            continue;
        }

        let name = options.format().apply(&key);
        if name.is_empty() {
            trace!(key = %key, "Formatted name is empty, skipping");
            continue;
        }
        if result.contains_key(&name) {
            trace!(key = %key, name = %name, "Name already taken, skipping");
            continue;
        }

        let value = if options.json() {
            json::parse_value(raw)?
        } else {
            Some(raw.clone())
        };
        let Some(value) = value else {
            trace!(key = %key, "Value has no JSON form, skipping");
            continue;
        };

        result.insert(name, value)?;
    }

    if options.freeze() {
        result.freeze();
    }

    tracing::debug!(
        validator = validator.description(),
        source_len,
        accepted = result.len(),
        json = options.json(),
        freeze = options.freeze(),
        "Filtered source mapping"
    );

    Ok(result)
}

fn source_entries(source: &Value) -> FilterResult<Vec<(Cow<'_, str>, &Value)>> {
    match source {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
            .collect()),
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .map(|(i, v)| (Cow::Owned(i.to_string()), v))
            .collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(FilterError::InvalidEnvironment)
        }
    }
}
