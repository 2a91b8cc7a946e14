// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge reporting a fixed platform identity.
//
// Used by hosts that already know their OS version (e.g. it was handed over
// by the embedding app) and by tests that need a deterministic answer.

use zeb_core::error::Result;

use crate::traits::PlatformBridge;

/// Reports the name and version it was constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    name: String,
    version: String,
}

impl FixedPlatform {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl PlatformBridge for FixedPlatform {
    fn platform_name(&self) -> &str {
        &self.name
    }

    fn os_version(&self) -> Result<String> {
        Ok(self.version.clone())
    }
}
