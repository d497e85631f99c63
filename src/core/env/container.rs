// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until Arc::make_mut() on first write
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

/// Shared environment data, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvData {
    vars: Vec<(String, String)>,
}

impl EnvData {
    fn position(&self, key: &str) -> Option<usize> {
        self.vars.iter().position(|(k, _)| k == key)
    }
}

/// A set of environment variables with copy-on-write semantics.
///
/// Variables keep the order in which they were first set. Setting an
/// existing variable replaces its value in place.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    data: Arc<EnvData>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from key/value pairs.
    ///
    /// Later duplicates replace the value of the first occurrence.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (key, value) in pairs {
            env.set(key, value);
        }
        env
    }

    /// Sets an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        let data = Arc::make_mut(&mut self.data);

        match data.position(&key) {
            Some(index) => data.vars[index].1 = value,
            None => data.vars.push((key, value)),
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .position(key)
            .map(|index| self.data.vars[index].1.as_str())
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if let Some(index) = self.data.position(key) {
            Arc::make_mut(&mut self.data).vars.remove(index);
        }
        self
    }

    /// Returns an iterator over environment variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars.len()
    }

    /// Returns true if this snapshot shares its data with another clone.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }

    /// Converts the variables into a JSON object, preserving order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(k, v)| (k.to_owned(), Value::String(v.to_owned())))
            .collect();
        Value::Object(map)
    }
}

impl From<&Env> for Value {
    fn from(env: &Env) -> Self {
        env.to_value()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
