// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filter options and key formatting.
//!
//! ```text
//! FilterOptions { json: false, freeze: false, format: Identity }
//!
//! KeyFormat
//!   Identity                  key -> key
//!   Transforms([..])          key -> t1 -> t2 -> ...
//!   Custom(Fn(&str)->String)  key -> f(key)
//!
//! KeyTransform specs:
//!   strip_prefix:APP_   strip_suffix:_URL   replace:FROM=TO
//!   lowercase   uppercase   camel_case
//! ```

use std::fmt;
use std::sync::Arc;

use bon::Builder;

use crate::error::ConfigError;

/// Shared key formatting function.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling how accepted entries are stored.
#[derive(Debug, Clone, Builder)]
pub struct FilterOptions {
    /// Parse each accepted value as JSON.
    #[builder(setters(name = with_json), default = false)]
    json: bool,
    /// Freeze the result and every object value inside it.
    #[builder(setters(name = with_freeze), default = false)]
    freeze: bool,
    /// Rename each accepted key before insertion.
    #[builder(setters(name = with_format), default)]
    format: KeyFormat,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FilterOptions {
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub const fn freeze(&self) -> bool {
        self.freeze
    }

    #[must_use]
    pub const fn format(&self) -> &KeyFormat {
        &self.format
    }
}

/// How accepted keys are renamed.
#[derive(Clone, Default)]
pub enum KeyFormat {
    /// Keep keys as they are.
    #[default]
    Identity,
    /// Apply transforms left to right.
    Transforms(Vec<KeyTransform>),
    /// Caller-supplied function.
    Custom(Formatter),
}

impl KeyFormat {
    #[must_use]
    pub const fn identity() -> Self {
        Self::Identity
    }

    /// Chains transforms. An empty chain is the identity.
    #[must_use]
    pub fn transforms(transforms: impl IntoIterator<Item = KeyTransform>) -> Self {
        let transforms: Vec<_> = transforms.into_iter().collect();
        if transforms.is_empty() {
            Self::Identity
        } else {
            Self::Transforms(transforms)
        }
    }

    pub fn custom<F>(format: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(format))
    }

    /// Parses transform specs, falling back to the identity when any spec
    /// is not recognised.
    #[must_use]
    pub fn from_specs<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Result<Vec<KeyTransform>, ConfigError> =
            specs.into_iter().map(|s| s.as_ref().parse::<KeyTransform>()).collect();

        match parsed {
            Ok(transforms) => Self::transforms(transforms),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring key format, using identity");
                Self::Identity
            }
        }
    }

    /// Formats a key.
    #[must_use]
    pub fn apply(&self, key: &str) -> String {
        match self {
            Self::Identity => key.to_owned(),
            Self::Transforms(transforms) => transforms
                .iter()
                .fold(key.to_owned(), |name, transform| transform.apply(&name)),
            Self::Custom(format) => format(key),
        }
    }

    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl fmt::Debug for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Transforms(transforms) => f.debug_tuple("Transforms").field(transforms).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A single built-in key transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTransform {
    /// Removes a leading literal, if present.
    StripPrefix(String),
    /// Removes a trailing literal, if present.
    StripSuffix(String),
    /// Replaces the first occurrence of `from` with `to`.
    Replace { from: String, to: String },
    Lowercase,
    Uppercase,
    /// `APP_DATABASE_URL` -> `appDatabaseUrl`
    CamelCase,
}

impl KeyTransform {
    #[must_use]
    pub fn apply(&self, key: &str) -> String {
        match self {
            Self::StripPrefix(prefix) => key.strip_prefix(prefix.as_str()).unwrap_or(key).to_owned(),
            Self::StripSuffix(suffix) => key.strip_suffix(suffix.as_str()).unwrap_or(key).to_owned(),
            Self::Replace { from, to } => key.replacen(from.as_str(), to, 1),
            Self::Lowercase => key.to_lowercase(),
            Self::Uppercase => key.to_uppercase(),
            Self::CamelCase => camel_case(key),
        }
    }
}

impl fmt::Display for KeyTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StripPrefix(prefix) => write!(f, "strip_prefix:{prefix}"),
            Self::StripSuffix(suffix) => write!(f, "strip_suffix:{suffix}"),
            Self::Replace { from, to } => write!(f, "replace:{from}={to}"),
            Self::Lowercase => write!(f, "lowercase"),
            Self::Uppercase => write!(f, "uppercase"),
            Self::CamelCase => write!(f, "camel_case"),
        }
    }
}

impl std::str::FromStr for KeyTransform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |message: String| ConfigError::ParseError {
            key: "format".to_string(),
            message,
        };

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name.trim().to_lowercase().as_str(), arg) {
            ("strip_prefix", Some(prefix)) if !prefix.is_empty() => {
                Ok(Self::StripPrefix(prefix.to_string()))
            }
            ("strip_suffix", Some(suffix)) if !suffix.is_empty() => {
                Ok(Self::StripSuffix(suffix.to_string()))
            }
            ("replace", Some(arg)) => match arg.split_once('=') {
                Some((from, to)) if !from.is_empty() => Ok(Self::Replace {
                    from: from.to_string(),
                    to: to.to_string(),
                }),
                _ => Err(invalid(format!("expected 'replace:FROM=TO', got '{s}'"))),
            },
            ("lowercase", None) => Ok(Self::Lowercase),
            ("uppercase", None) => Ok(Self::Uppercase),
            ("camel_case" | "camelcase", None) => Ok(Self::CamelCase),
            _ => Err(invalid(format!("unknown key transform '{s}'"))),
        }
    }
}

/// Lower camel case over words split at non-alphanumeric characters and at
/// lower-to-upper case boundaries.
fn camel_case(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in key.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::with_capacity(key.len());
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
