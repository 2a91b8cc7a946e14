// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel registration and dispatch.
//
// The host framework owns transport; a `Registrar` is the seam through which
// a plugin attaches its handler to a named channel. `ChannelRegistry` is the
// in-process registrar used by the probe binary and by tests.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use zeb_core::error::{Result, ZebError};
use zeb_core::{MethodCall, MethodResponse};

use crate::codec;
use crate::handler::MethodCallHandler;

/// Host-provided object that attaches handlers to named channels.
pub trait Registrar {
    fn add_method_call_delegate(
        &self,
        channel: &str,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<()>;
}

/// Map of channel name to handler.
///
/// The lock only guards the map; handlers run after it is released, so a
/// slow handler never blocks registration or calls on other channels.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `channel`. A channel holds at most one handler.
    pub fn register(&self, channel: &str, handler: Arc<dyn MethodCallHandler>) -> Result<()> {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if handlers.contains_key(channel) {
            return Err(ZebError::ChannelAlreadyRegistered(channel.to_owned()));
        }
        handlers.insert(channel.to_owned(), handler);
        info!(channel, "method call handler registered");
        Ok(())
    }

    /// Detach the handler on `channel`. Returns whether one was attached.
    pub fn unregister(&self, channel: &str) -> bool {
        let removed = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(channel)
            .is_some();
        if removed {
            info!(channel, "method call handler removed");
        }
        removed
    }

    pub fn is_registered(&self, channel: &str) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(channel)
    }

    fn handler(&self, channel: &str) -> Option<Arc<dyn MethodCallHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .cloned()
    }

    /// Dispatch a decoded call to the handler on `channel`.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Result<MethodResponse> {
        let handler = self
            .handler(channel)
            .ok_or_else(|| ZebError::ChannelNotFound(channel.to_owned()))?;
        debug!(channel, method = %call.method, "dispatching method call");
        Ok(handler.handle(call))
    }

    /// Decode a JSON method call, dispatch it and encode the reply envelope.
    ///
    /// A channel with no handler yields an empty reply, which hosts read as
    /// "nobody is listening".
    pub fn invoke_encoded(&self, channel: &str, message: &[u8]) -> Result<Vec<u8>> {
        let Some(handler) = self.handler(channel) else {
            warn!(channel, "message on channel with no handler");
            return Ok(Vec::new());
        };
        let call = codec::decode_call(message)?;
        debug!(channel, method = %call.method, "dispatching encoded method call");
        codec::encode_response(&handler.handle(&call))
    }
}

impl Registrar for ChannelRegistry {
    fn add_method_call_delegate(
        &self,
        channel: &str,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<()> {
        self.register(channel, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo() -> Arc<dyn MethodCallHandler> {
        Arc::new(|call: &MethodCall| MethodResponse::success(call.method.clone()))
    }

    #[test]
    fn register_and_invoke() {
        let registry = ChannelRegistry::new();
        registry.register("echo", echo()).expect("register");
        assert!(registry.is_registered("echo"));

        let response = registry
            .invoke("echo", &MethodCall::new("ping"))
            .expect("invoke");
        assert_eq!(response.as_str(), Some("ping"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ChannelRegistry::new();
        registry.register("echo", echo()).expect("first");
        let err = registry.register("echo", echo()).expect_err("second");
        assert!(matches!(err, ZebError::ChannelAlreadyRegistered(name) if name == "echo"));
    }

    #[test]
    fn invoke_on_unknown_channel_fails() {
        let registry = ChannelRegistry::new();
        let err = registry
            .invoke("nowhere", &MethodCall::new("ping"))
            .expect_err("no handler");
        assert!(matches!(err, ZebError::ChannelNotFound(name) if name == "nowhere"));
    }

    #[test]
    fn unregister_detaches_handler() {
        let registry = ChannelRegistry::new();
        registry.register("echo", echo()).expect("register");
        assert!(registry.unregister("echo"));
        assert!(!registry.unregister("echo"));
        assert!(!registry.is_registered("echo"));
    }

    #[test]
    fn encoded_call_round_trips_through_handler() {
        let registry = ChannelRegistry::new();
        registry.register("echo", echo()).expect("register");

        let reply = registry
            .invoke_encoded("echo", br#"{"method":"ping","args":null}"#)
            .expect("invoke");
        let envelope: serde_json::Value = serde_json::from_slice(&reply).expect("json");
        assert_eq!(envelope, json!(["ping"]));
    }

    #[test]
    fn encoded_call_on_unknown_channel_gets_empty_reply() {
        let registry = ChannelRegistry::new();
        let reply = registry
            .invoke_encoded("nowhere", br#"{"method":"ping"}"#)
            .expect("invoke");
        assert!(reply.is_empty());
    }

    #[test]
    fn malformed_encoded_call_is_an_error() {
        let registry = ChannelRegistry::new();
        registry.register("echo", echo()).expect("register");
        let err = registry
            .invoke_encoded("echo", br#"{"args":1}"#)
            .expect_err("missing method");
        assert!(matches!(err, ZebError::MalformedCall(_)));
    }

    #[test]
    fn registry_is_usable_as_registrar() {
        let registry = ChannelRegistry::new();
        let registrar: &dyn Registrar = &registry;
        registrar
            .add_method_call_delegate("echo", echo())
            .expect("register");
        assert!(registry.is_registered("echo"));
    }

    #[test]
    fn concurrent_invocations_are_independent() {
        let registry = Arc::new(ChannelRegistry::new());
        registry.register("echo", echo()).expect("register");

        let threads: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let method = format!("call-{i}");
                    let response = registry
                        .invoke("echo", &MethodCall::new(method.clone()))
                        .expect("invoke");
                    assert_eq!(response.as_str(), Some(method.as_str()));
                })
            })
            .collect();

        for t in threads {
            t.join().expect("thread panicked");
        }
    }
}
