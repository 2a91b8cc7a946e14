// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invocation and response model for the method-channel boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default channel the plugin attaches to.
pub const DEFAULT_CHANNEL_NAME: &str = "zeb_permissions_helper";

/// A single named request sent to a handler by the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name. Matched exactly and case-sensitively.
    pub method: String,
    /// Opaque argument payload. `Null` when the host sent none.
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    /// Build a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Value::Null,
        }
    }

    /// Build a call carrying an argument payload.
    pub fn with_args(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of handling a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// The method ran and produced a value.
    Success(Value),
    /// The method is recognised but could not produce a value.
    Error {
        code: String,
        message: Option<String>,
        /// Absent and JSON `null` are the same on the wire; build through
        /// [`MethodResponse::error_with_details`] to keep them as `None`.
        details: Option<Value>,
    },
    /// The handler has no behaviour for this method name. Not an error: the
    /// caller should fall back to its default.
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: Some(message.into()),
            details: None,
        }
    }

    /// Error carrying structured details. A `null` payload is stored as
    /// `None`.
    pub fn error_with_details(
        code: impl Into<String>,
        message: Option<String>,
        details: Value,
    ) -> Self {
        Self::Error {
            code: code.into(),
            message,
            details: (!details.is_null()).then_some(details),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// The success payload as a string, if that is what it holds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// Closed set of method names this plugin answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginMethod {
    /// `"getPlatformVersion"`: returns `"<PlatformName> <version>"`.
    GetPlatformVersion,
}

impl PluginMethod {
    /// Resolve a wire method name. Returns `None` for anything unrecognised,
    /// including names that differ only in case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getPlatformVersion" => Some(Self::GetPlatformVersion),
            _ => None,
        }
    }

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetPlatformVersion => "getPlatformVersion",
        }
    }
}

impl std::fmt::Display for PluginMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
