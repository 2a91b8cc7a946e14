// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform query handler.
//
// Maps an invocation's method name to a response. The only recognised method
// is `getPlatformVersion`; every other name is answered with the
// not-implemented sentinel, never with an error.

use tracing::{debug, warn};

use zeb_bridge::PlatformBridge;
use zeb_core::{MethodCall, MethodResponse, PluginMethod};

/// Error code sent when the platform bridge cannot produce a version.
pub const UNAVAILABLE: &str = "UNAVAILABLE";

/// Anything that can answer method calls on a channel.
pub trait MethodCallHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> MethodResponse;
}

impl<F> MethodCallHandler for F
where
    F: Fn(&MethodCall) -> MethodResponse + Send + Sync,
{
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        self(call)
    }
}

/// Stateless handler answering `getPlatformVersion` from a [`PlatformBridge`].
///
/// One instance can serve every call in the process, from any thread.
pub struct PlatformQueryHandler<B = Box<dyn PlatformBridge>> {
    bridge: B,
}

impl PlatformQueryHandler {
    /// Handler backed by the bridge for the compile target.
    pub fn native() -> Self {
        Self::new(zeb_bridge::platform_bridge())
    }
}

impl<B: PlatformBridge> PlatformQueryHandler<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    fn platform_version(&self) -> MethodResponse {
        match self.bridge.platform_version() {
            Ok(version) => MethodResponse::success(version),
            Err(e) => {
                warn!(
                    platform = self.bridge.platform_name(),
                    error = %e,
                    "could not read OS version"
                );
                MethodResponse::error(UNAVAILABLE, e.to_string())
            }
        }
    }
}

impl<B: PlatformBridge> MethodCallHandler for PlatformQueryHandler<B> {
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        let Some(method) = PluginMethod::from_name(&call.method) else {
            debug!(method = %call.method, "method not implemented");
            return MethodResponse::NotImplemented;
        };
        debug!(%method, "handling method call");
        match method {
            PluginMethod::GetPlatformVersion => self.platform_version(),
        }
    }
}
