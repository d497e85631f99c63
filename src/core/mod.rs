// filter-env-rs: environment variable filtering
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment access.
//!
//! ```text
//!          core
//!           |
//!           v
//!          env
//!           |
//!   Env  ReadEnv  SystemEnv
//! ```

pub mod env;
