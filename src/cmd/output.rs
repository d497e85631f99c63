// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering filtered entries.
//!
//! ```text
//! Json    {"APP_PORT":8080}
//! Pretty  {\n  "APP_PORT": 8080\n}
//! Dotenv  APP_PORT=8080
//!         APP_PLAIN=plain
//!         APP_NAME="my app"          (JSON-quoted when needed)
//!         APP_TAGS="[\"a\",\"b\"]"   (non-strings as compact JSON)
//! ```

use serde_json::Value;

use crate::config::types::OutputFormat;
use crate::error::Result;
use crate::filter::FilteredEnv;

/// Renders `filtered` in the requested format, without a trailing newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(filtered: &FilteredEnv, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(filtered)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(filtered)?),
        OutputFormat::Dotenv => {
            let mut lines = Vec::with_capacity(filtered.len());
            for (name, value) in filtered.iter() {
                lines.push(format!("{name}={}", dotenv_value(value)?));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn dotenv_value(value: &Value) -> Result<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other)?,
    };
    if needs_quotes(&raw) {
        Ok(serde_json::to_string(&raw)?)
    } else {
        Ok(raw)
    }
}

fn needs_quotes(raw: &str) -> bool {
    raw.chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '$' | '\\' | '`'))
}
