// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// zeb-core — Invocation model, error type and plugin configuration shared by
// the bridge, plugin and probe crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::PluginConfig;
pub use error::ZebError;
pub use types::*;
