// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the plugin workspace.

use thiserror::Error;

/// Top-level error type for all plugin operations.
///
/// Note that an unrecognised method name is *not* an error: it is answered
/// with [`crate::MethodResponse::NotImplemented`].
#[derive(Debug, Error)]
pub enum ZebError {
    // -- Codec --
    #[error("codec error: {0}")]
    Codec(String),

    #[error("malformed method call: {0}")]
    MalformedCall(String),

    // -- Channel --
    #[error("no handler registered on channel '{0}'")]
    ChannelNotFound(String),

    #[error("channel '{0}' already has a handler")]
    ChannelAlreadyRegistered(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ZebError>;
