// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait for reading the host OS identity.

use zeb_core::error::Result;

/// Source of the platform name and OS version string.
///
/// Implementations hold no mutable state and may be shared across threads.
pub trait PlatformBridge: Send + Sync {
    /// Human-readable platform name without a version (e.g. "iOS", "Android").
    fn platform_name(&self) -> &str;

    /// OS version as reported by the system (e.g. "17.0").
    ///
    /// Read fresh on every call; implementations must not cache it.
    fn os_version(&self) -> Result<String>;

    /// `"<platform name> <os version>"`.
    fn platform_version(&self) -> Result<String> {
        Ok(format!("{} {}", self.platform_name(), self.os_version()?))
    }
}

impl<B: PlatformBridge + ?Sized> PlatformBridge for Box<B> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn os_version(&self) -> Result<String> {
        (**self).os_version()
    }
}

impl<B: PlatformBridge + ?Sized> PlatformBridge for std::sync::Arc<B> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }

    fn os_version(&self) -> Result<String> {
        (**self).os_version()
    }
}
