// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key validators.
//!
//! ```text
//! "^APP_"        --> Regex::new            --+
//! "/^app_/i"     --> RegexBuilder + flags  --+--> Validator { test(key) -> bool }
//! Regex          -----------------------------+
//! |key| -> bool  -----------------------------+
//! ```
//!
//! Whatever the input shape, it is resolved once into a single boxed test
//! function; the filter loop never looks at the original shape again.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::error::{FilterError, FilterResult};

type TestFn = dyn Fn(&str) -> bool + Send + Sync;

/// Decides whether a key is accepted into the result.
#[derive(Clone)]
pub struct Validator {
    test: Arc<TestFn>,
    description: Box<str>,
}

impl Validator {
    /// Builds a validator from a pattern string.
    ///
    /// Accepts either a bare regular expression (`^APP_`) or a slash-delimited
    /// literal with flags (`/^app_/i`). Supported flags: `i` (case-insensitive),
    /// `m` (multi-line), `s` (dot matches newline), `x` (ignore whitespace);
    /// `u` and `g` are accepted and have no effect.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidValidator`] if the pattern is blank, has
    /// unknown or repeated flags, or is not a valid regular expression.
    pub fn pattern(pattern: &str) -> FilterResult<Self> {
        if pattern.trim().is_empty() {
            tracing::debug!("Rejected blank pattern");
            return Err(FilterError::InvalidValidator);
        }

        let regex = match split_literal(pattern) {
            Some((body, flags)) => build_literal(body, flags)?,
            None => Regex::new(pattern).map_err(|e| {
                tracing::debug!(pattern, error = %e, "Rejected invalid pattern");
                FilterError::InvalidValidator
            })?,
        };

        Ok(Self::regex(regex))
    }

    /// Builds a validator that accepts keys matched anywhere by `regex`.
    #[must_use]
    pub fn regex(regex: Regex) -> Self {
        let description = format!("/{}/", regex.as_str()).into_boxed_str();
        Self {
            test: Arc::new(move |key: &str| regex.is_match(key)),
            description,
        }
    }

    /// Builds a validator from a key predicate.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(predicate),
            description: "<predicate>".into(),
        }
    }

    /// Tests a key.
    #[inline]
    #[must_use]
    pub fn test(&self, key: &str) -> bool {
        (self.test)(key)
    }

    /// Human readable form, used in logs.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.description).finish()
    }
}

impl From<Regex> for Validator {
    fn from(regex: Regex) -> Self {
        Self::regex(regex)
    }
}

impl std::str::FromStr for Validator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::pattern(s)
    }
}

/// Splits `/body/flags` into its parts. Returns `None` for bare patterns.
fn split_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    Some((&rest[..end], &rest[end + 1..]))
}

fn build_literal(body: &str, flags: &str) -> FilterResult<Regex> {
    if body.is_empty() {
        tracing::debug!("Rejected empty pattern literal");
        return Err(FilterError::InvalidValidator);
    }

    let mut builder = RegexBuilder::new(body);
    let mut seen = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if seen.contains(flag) {
            tracing::debug!(flag = %flag, "Rejected repeated pattern flag");
            return Err(FilterError::InvalidValidator);
        }
        seen.push(flag);

        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'u' | 'g' => {}
            other => {
                tracing::debug!(flag = %other, "Rejected unknown pattern flag");
                return Err(FilterError::InvalidValidator);
            }
        }
    }

    builder.build().map_err(|e| {
        tracing::debug!(pattern = body, error = %e, "Rejected invalid pattern literal");
        FilterError::InvalidValidator
    })
}
