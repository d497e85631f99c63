// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for the `filter-env` binary.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. filter-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. FILTER_ENV__* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FILTER_ENV__FILTER__JSON=true       → filter.json = true
//! FILTER_ENV__FILTER__PATTERN=^APP_   → filter.pattern = "^APP_"
//! FILTER_ENV__GLOBAL__LOG_LEVEL=4     → global.log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{FilterConfig, GlobalConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "filter-env.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "FILTER_ENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Default filter request.
    pub filter: FilterConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filter_env_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .with_default_file("filter-env.toml")
    ///     .with_env_prefix("FILTER_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().with_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().with_toml(content).build()
    }

    /// Format configuration options for display, one `section.key = value`
    /// per line, in a fixed order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let unset = || "(unset)".to_string();
        let global = &self.global;
        let filter = &self.filter;

        vec![
            format!("global.log_level = {}", global.log_level.as_u8()),
            format!(
                "global.file_log_level = {}",
                global
                    .file_log_level
                    .map_or_else(unset, |level| level.as_u8().to_string())
            ),
            format!(
                "global.log_file = {}",
                global
                    .log_file
                    .as_ref()
                    .map_or_else(unset, |path| path.display().to_string())
            ),
            format!(
                "filter.pattern = {}",
                filter.pattern.clone().unwrap_or_else(unset)
            ),
            format!("filter.json = {}", filter.json),
            format!("filter.freeze = {}", filter.freeze),
            format!("filter.format = [{}]", filter.format.join(", ")),
            format!("filter.output = {}", filter.output),
        ]
    }
}
