// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// zeb-plugin — The platform query handler, the channel registry hosts attach
// it to, and the JSON method codec used on the channel. Platform details come
// from `zeb-bridge`; the invocation model comes from `zeb-core`.

pub mod channel;
pub mod codec;
pub mod handler;
pub mod plugin;

pub use channel::{ChannelRegistry, Registrar};
pub use handler::{MethodCallHandler, PlatformQueryHandler};
pub use plugin::ZebPermissionsHelperPlugin;
