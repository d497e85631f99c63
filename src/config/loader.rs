// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! # Layers (low → high priority)
//!
//! ```text
//!   built-in defaults  (Config::default via serde)
//!          |
//!   with_default_file  filter-env.toml, skipped when absent
//!          |
//!   with_file          --config FILE, must exist
//!          |
//!   with_toml          inline TOML (tests, embedding)
//!          |
//!   with_env_prefix    FILTER_ENV__FILTER__JSON=true
//!          |
//!   with_override      CLI flags
//!          v
//!       build() --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use super::Config;
use crate::error::Result;

/// One layer that contributed to the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `filter-env.toml` found next to the working directory.
    Default(PathBuf),
    /// A file named on the command line.
    File(PathBuf),
    /// TOML text passed directly.
    Inline,
    /// Variables carrying the given prefix.
    Environment(String),
    /// A single `section.key` override.
    Override(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Inline => f.write_str("[inline] <toml>"),
            Self::Environment(prefix) => write!(f, "[env] {prefix}__*"),
            Self::Override(key) => write!(f, "[override] {key}"),
        }
    }
}

/// Collects configuration layers and merges them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is silently skipped when missing.
    ///
    /// Only files present at call time show up in [`sources`](Self::sources).
    #[must_use]
    pub fn with_default_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources.push(ConfigSource::Default(path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn with_toml(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX__SECTION__KEY` variables as overrides.
    ///
    /// The environment layer is applied at build time, above every file.
    /// Variables that only share the prefix (`PREFIX_DEBUG`) are not read.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides a single `section.key` value, above every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is malformed.
    pub fn with_override(mut self, key: &str, value: impl Into<config::Value>) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid configuration override '{key}'"))?;
        self.sources.push(ConfigSource::Override(key.to_string()));
        Ok(self)
    }

    /// Merges every layer and deserializes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid TOML,
    /// or the merged values do not fit [`Config`] (unknown sections included).
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        let config: Config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("failed to read configuration values")?;
        tracing::debug!(
            layers = self.sources.len(),
            env_prefix = self.env_prefix.as_deref(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Layers registered so far, environment layer last when enabled.
    #[must_use]
    pub fn sources(&self) -> Vec<ConfigSource> {
        let mut sources = self.sources.clone();
        if let Some(prefix) = &self.env_prefix {
            sources.push(ConfigSource::Environment(prefix.clone()));
        }
        sources
    }

    /// Numbered, human-readable listing of [`sources`](Self::sources).
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources()
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
