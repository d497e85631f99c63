// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            FilterError
//!                 |
//!   +-------------+-------------+---------+
//!   |             |             |         |
//!   v             v             v         v
//! InvalidEnv  InvalidValidator Syntax   Frozen
//! (usage)     (usage)          (data)   (mutation)
//!
//! ConfigError   InvalidValue, ParseError
//! ```
//!
//! Library calls return [`FilterResult`]; the binary and the config layer
//! work with the `anyhow`-based [`Result`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`FilterError`].
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// Errors raised while filtering a source mapping.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The source is not a mapping (object or array).
    #[error("Invalid environment")]
    InvalidEnvironment,

    /// The predicate could not be turned into a usable validator.
    #[error("Invalid validation function")]
    InvalidValidator,

    /// A value that looks like a JSON object or array failed to parse.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// Attempted to modify a frozen result or a frozen value inside it.
    #[error("cannot modify frozen entry '{key}'")]
    Frozen { key: Box<str> },
}

impl FilterError {
    pub(crate) fn frozen(key: impl Into<String>) -> Self {
        Self::Frozen {
            key: key.into().into_boxed_str(),
        }
    }

    /// Returns true for errors caused by malformed call arguments.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidEnvironment | Self::InvalidValidator)
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration value.
    #[error("failed to parse '{key}': {message}")]
    ParseError { key: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
