// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   env, file --> filter --> output::render --> stdout
//!   options, configs
//! ```

pub mod config;
pub mod filter;
pub mod output;
