// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sources of environment snapshots.

use super::container::Env;

/// Something that can hand out a snapshot of environment variables.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    /// Returns the variables as they are at call time.
    fn snapshot(&self) -> Env;
}

/// Zero-sized type that reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn snapshot(&self) -> Env {
        super::current_env()
    }
}

/// A fixed snapshot, mostly useful in tests.
impl ReadEnv for Env {
    fn snapshot(&self) -> Env {
        self.clone()
    }
}
