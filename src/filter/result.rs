// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The filtered mapping.
//!
//! ```text
//! FilteredEnv { entries: ordered Map<String, Value>, frozen }
//!
//!                 not frozen   frozen
//! insert/remove   Ok           Err(Frozen)
//! value_mut
//!   object        Ok           Err(Frozen)   value itself is frozen
//!   array         Ok           Ok            freezing is shallow
//!   scalar        Ok           Err(Frozen)   slot is frozen
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{FilterError, FilterResult};

/// Result of a filter call. Freezing is a one-way transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredEnv {
    entries: Map<String, Value>,
    frozen: bool,
}

impl FilteredEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Takes the entries out. The owned map is no longer frozen.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// True when the result is frozen and `key` holds an object.
    #[must_use]
    pub fn is_value_frozen(&self, key: &str) -> bool {
        self.frozen && self.entries.get(key).is_some_and(Value::is_object)
    }

    /// Inserts an entry, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Frozen`] if the result is frozen.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> FilterResult<Option<Value>> {
        let key = key.into();
        if self.frozen {
            return Err(FilterError::frozen(key));
        }
        Ok(self.entries.insert(key, value))
    }

    /// Removes an entry, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Frozen`] if the result is frozen.
    pub fn remove(&mut self, key: &str) -> FilterResult<Option<Value>> {
        if self.frozen {
            return Err(FilterError::frozen(key));
        }
        Ok(self.entries.shift_remove(key))
    }

    /// Mutable access to a value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Frozen`] if the result is frozen and the value
    /// is not an array.
    pub fn value_mut(&mut self, key: &str) -> FilterResult<Option<&mut Value>> {
        let frozen = self.frozen;
        match self.entries.get_mut(key) {
            None => Ok(None),
            Some(value) if frozen && !value.is_array() => Err(FilterError::frozen(key)),
            Some(value) => Ok(Some(value)),
        }
    }

    pub(crate) const fn freeze(&mut self) {
        self.frozen = true;
    }
}

impl Serialize for FilteredEnv {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl From<FilteredEnv> for Value {
    fn from(filtered: FilteredEnv) -> Self {
        Self::Object(filtered.entries)
    }
}

impl<'a> IntoIterator for &'a FilteredEnv {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
