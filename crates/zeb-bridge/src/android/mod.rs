// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The version is read from the static field
// `android.os.Build.VERSION.RELEASE` through the ART runtime.

#![cfg(target_os = "android")]

use jni::JNIEnv;
use jni::objects::JString;

use zeb_core::error::{Result, ZebError};

use crate::traits::PlatformBridge;

const BUILD_VERSION_CLASS: &str = "android/os/Build$VERSION";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Run `f` with a [`JNIEnv`] attached to the current thread.
///
/// The `JavaVM*` comes from `ndk_context::android_context()`, set by
/// `android_main` or `ANativeActivity_onCreate`. The thread is attached for
/// the duration of the call if it is not already.
fn with_env<T>(f: impl FnOnce(&mut JNIEnv<'_>) -> jni::errors::Result<T>) -> Result<T> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_err("failed to attach JNI thread", e))?;
    f(&mut env).map_err(|e| jni_err("JNI call failed", e))
}

/// Map any `jni::errors::Error` into `ZebError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> ZebError {
    ZebError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the platform bridge.
///
/// Zero-sized; all state lives on the Java side. Construction does not touch
/// JNI.
pub struct AndroidBridge;

impl AndroidBridge {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn os_version(&self) -> Result<String> {
        with_env(|env| {
            let release = env
                .get_static_field(BUILD_VERSION_CLASS, "RELEASE", "Ljava/lang/String;")?
                .l()?;
            let release = JString::from(release);
            let release: String = env.get_string(&release)?.into();
            Ok(release)
        })
    }
}
