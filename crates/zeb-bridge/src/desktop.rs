// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop/CI bridge for targets without a mobile SDK.
//
// Versions come from sysinfo, which covers Linux, macOS, Windows and the BSDs.
// Linux reports the kernel release (matching `uname -r`); other desktops
// report the OS product version (e.g. "14.5" on macOS).

use sysinfo::System;

use zeb_core::error::Result;

use crate::traits::PlatformBridge;

/// Reported when the OS exposes neither a product nor a kernel version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Bridge returned on non-mobile platforms.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopBridge;

impl DesktopBridge {
    pub fn new() -> Self {
        Self
    }
}

/// Display name for a Rust target OS identifier.
fn display_name(os: &'static str) -> &'static str {
    match os {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// Preferred version source first, the other as fallback.
fn read_version() -> Option<String> {
    if cfg!(target_os = "linux") {
        System::kernel_version().or_else(System::os_version)
    } else {
        System::os_version().or_else(System::kernel_version)
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        display_name(std::env::consts::OS)
    }

    fn os_version(&self) -> Result<String> {
        Ok(read_version().unwrap_or_else(|| {
            tracing::warn!(os = std::env::consts::OS, "OS reports no version");
            UNKNOWN_VERSION.to_owned()
        }))
    }
}
