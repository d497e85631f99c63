// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! GlobalConfig: log_level, file_log_level, log_file
//! FilterConfig: pattern, json, freeze, format[], output
//! OutputFormat: Json (default) | Pretty | Dotenv
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, FilterError, FilterResult};
use crate::filter::{FilterOptions, KeyFormat, Validator};
use crate::logging::LogLevel;

/// How filtered entries are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON object.
    #[default]
    Json,
    /// Indented JSON object.
    Pretty,
    /// `KEY=value` lines.
    Dotenv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Dotenv => write!(f, "dotenv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "dotenv" | "env" => Ok(Self::Dotenv),
            _ => Err(ConfigError::InvalidValue {
                section: "filter".to_string(),
                key: "output".to_string(),
                message: format!("expected 'json', 'pretty', or 'dotenv', got '{s}'"),
            }),
        }
    }
}

/// Global (logging) options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// File log level; falls back to `log_level`.
    pub file_log_level: Option<LogLevel>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

/// Default filter request, overridable from the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Key pattern, bare (`^APP_`) or literal (`/^app_/i`).
    pub pattern: Option<String>,
    /// Parse values as JSON.
    pub json: bool,
    /// Freeze the result.
    pub freeze: bool,
    /// Key transform specs, applied in order.
    pub format: Vec<String>,
    /// Output format.
    pub output: OutputFormat,
}

impl FilterConfig {
    /// Builds the validator from `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidValidator`] if no pattern is set or the
    /// pattern is unusable.
    pub fn validator(&self) -> FilterResult<Validator> {
        self.pattern
            .as_deref()
            .ok_or(FilterError::InvalidValidator)
            .and_then(Validator::pattern)
    }

    /// Builds filter options. Unknown format specs resolve to the identity.
    #[must_use]
    pub fn options(&self) -> FilterOptions {
        FilterOptions::builder()
            .with_json(self.json)
            .with_freeze(self.freeze)
            .with_format(KeyFormat::from_specs(&self.format))
            .build()
    }
}
