// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS platform bridge via objc2.
//
// Requires compilation with the iOS SDK (Xcode). `UIDevice` is a main-thread
// class, so `systemVersion` is only read when a `MainThreadMarker` can be
// obtained. Hosts normally dispatch channel calls on the main (platform)
// thread; calls from any other thread fall back to
// `NSProcessInfo.operatingSystemVersion`, which is thread-safe and carries
// the same numbers.

#![cfg(target_os = "ios")]

use objc2::MainThreadMarker;
use objc2_foundation::NSProcessInfo;
use objc2_ui_kit::UIDevice;

use zeb_core::error::Result;

use crate::traits::PlatformBridge;
use crate::version::format_os_version;

/// iOS implementation of the platform bridge.
///
/// Zero-sized; every call goes straight to UIKit/Foundation.
pub struct IosBridge;

impl IosBridge {
    pub fn new() -> Self {
        Self
    }
}

/// `UIDevice.currentDevice.systemVersion`, e.g. "17.0".
fn device_system_version(mtm: MainThreadMarker) -> String {
    // SAFETY: currentDevice/systemVersion are plain property getters on the
    // shared device object. The marker proves we are on the main thread.
    #[allow(unused_unsafe)]
    let version = unsafe { UIDevice::currentDevice(mtm).systemVersion() };
    version.to_string()
}

/// `NSProcessInfo.operatingSystemVersion`, formatted like `systemVersion`.
fn process_info_version() -> String {
    // SAFETY: processInfo is a thread-safe singleton and
    // operatingSystemVersion returns a plain struct by value.
    #[allow(unused_unsafe)]
    let v = unsafe { NSProcessInfo::processInfo().operatingSystemVersion() };
    format_os_version(
        v.majorVersion as i64,
        v.minorVersion as i64,
        v.patchVersion as i64,
    )
}

impl PlatformBridge for IosBridge {
    fn platform_name(&self) -> &str {
        "iOS"
    }

    fn os_version(&self) -> Result<String> {
        match MainThreadMarker::new() {
            Some(mtm) => Ok(device_system_version(mtm)),
            None => {
                tracing::debug!("off main thread; reading version from NSProcessInfo");
                Ok(process_info_version())
            }
        }
    }
}
