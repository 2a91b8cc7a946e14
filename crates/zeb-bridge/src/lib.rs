// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// zeb-bridge — Native platform bridges.
//
// Each bridge answers two questions: what the platform is called and which
// OS version it is running. iOS goes through objc2 (UIKit/Foundation),
// Android through JNI, and everything else through the desktop bridge.

pub mod fixed;
pub mod traits;
pub mod version;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

pub use fixed::FixedPlatform;
pub use traits::PlatformBridge;

/// Returns the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    #[cfg(target_os = "ios")]
    {
        Box::new(ios::IosBridge::new())
    }
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(desktop::DesktopBridge::new())
    }
}
