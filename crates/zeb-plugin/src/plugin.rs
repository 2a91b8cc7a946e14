// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plugin entry point: attach the platform query handler to its channel.

use std::sync::Arc;

use tracing::info;

use zeb_bridge::PlatformBridge;
use zeb_core::PluginConfig;
use zeb_core::error::Result;

use crate::channel::Registrar;
use crate::handler::PlatformQueryHandler;

/// The permissions helper plugin.
pub struct ZebPermissionsHelperPlugin;

impl ZebPermissionsHelperPlugin {
    /// Register a handler backed by the native platform bridge on
    /// `config.channel_name`.
    pub fn register(registrar: &dyn Registrar, config: &PluginConfig) -> Result<()> {
        Self::register_with_bridge(registrar, config, zeb_bridge::platform_bridge())
    }

    /// Register a handler backed by `bridge`. Hosts that already know their
    /// platform identity pass a `FixedPlatform` here.
    pub fn register_with_bridge<B>(
        registrar: &dyn Registrar,
        config: &PluginConfig,
        bridge: B,
    ) -> Result<()>
    where
        B: PlatformBridge + 'static,
    {
        let platform = bridge.platform_name().to_owned();
        let handler = Arc::new(PlatformQueryHandler::new(bridge));
        registrar.add_method_call_delegate(&config.channel_name, handler)?;
        info!(channel = %config.channel_name, %platform, "plugin registered");
        Ok(())
    }
}
