// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            env / file / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                       environment
//!               filter_environment, filter
//!                            |
//!              +-------------+-------------+
//!              v                           v
//!           filter                     core::env
//!   Validator, FilterOptions,       Env snapshot,
//!   json rule, FilteredEnv          ReadEnv, SystemEnv
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use filter_env_rs::{FilterOptions, KeyFormat, KeyTransform, Validator, filter};
//! use serde_json::json;
//!
//! let source = json!({
//!     "APP_DATABASE": "{\"host\":\"db\",\"port\":5432}",
//!     "APP_DEBUG": "true",
//!     "PATH": "/usr/bin",
//! });
//! let options = FilterOptions::builder()
//!     .with_json(true)
//!     .with_freeze(true)
//!     .with_format(KeyFormat::transforms([
//!         KeyTransform::StripPrefix("APP_".to_string()),
//!         KeyTransform::CamelCase,
//!     ]))
//!     .build();
//!
//! let config = filter(&source, &Validator::pattern("^APP_")?, &options)?;
//! assert_eq!(config.get("debug"), Some(&json!(true)));
//! assert_eq!(config.get("database"), Some(&json!({ "host": "db", "port": 5432 })));
//! assert!(config.is_value_frozen("database"));
//! # Ok::<(), filter_env_rs::error::FilterError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod filter;
pub mod logging;

pub use environment::{filter_environment, filter_environment_from};
pub use error::{FilterError, FilterResult};
pub use filter::{FilterOptions, FilteredEnv, KeyFormat, KeyTransform, Validator, filter};
