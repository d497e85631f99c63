// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lenient JSON interpretation of raw values.
//!
//! ```text
//! ""             --> ""            (unchanged)
//! "123.45"       --> 123.45
//! "plain text"   --> "plain text"  (parse failed, not structured)
//! "{\"a\": 1,"   --> Err(Syntax)   (parse failed, starts with { or [)
//! 42             --> 42            (numbers pass through)
//! null/bool/...  --> None          (entry is skipped)
//! ```
//!
//! Parsing has no nesting limit; deep documents grow the stack on the heap
//! instead of failing.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FilterError, FilterResult};

/// Interprets a raw source value as JSON.
///
/// Returns `Ok(None)` when the value has no JSON interpretation; the caller
/// leaves such entries out of the result.
///
/// Numbers outside the `f64` range (`"1e400"`) do not parse and, not being
/// structured, are kept as the raw string.
///
/// # Errors
///
/// Returns [`FilterError::Syntax`] if a string starting with `{` or `[`
/// (after leading whitespace) fails to parse.
pub fn parse_value(value: &Value) -> FilterResult<Option<Value>> {
    match value {
        Value::String(raw) if raw.is_empty() => Ok(Some(value.clone())),
        Value::String(raw) => match parse_unbounded(raw) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) if looks_structured(raw) => Err(FilterError::Syntax(err)),
            Err(_) => Ok(Some(value.clone())),
        },
        Value::Number(_) => Ok(Some(value.clone())),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Ok(None),
    }
}

fn looks_structured(raw: &str) -> bool {
    matches!(raw.trim_start().chars().next(), Some('{' | '['))
}

fn parse_unbounded(raw: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
