// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable snapshots.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write, insertion-ordered)
//! Sources: current_env(), Env::from_pairs(), Env::new()
//! Ops: set/get/remove/iter/to_value
//!
//! ReadEnv::snapshot()
//!   SystemEnv -> current_env()
//!   Env       -> clone (shares data)
//! ```
//!
//! - **Ordered**: variables keep the order the OS reported them in
//! - **Copy-on-write**: clones share data until modified
//! - **UTF-8 only**: non-Unicode variables are skipped when capturing

pub mod container;
pub mod source;

#[cfg(test)]
mod tests;

pub use container::Env;
pub use source::{ReadEnv, SystemEnv};

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    let mut skipped = 0usize;
    let pairs: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped non-Unicode environment variables");
    }

    Env::from_pairs(pairs)
}
