// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// zeb-probe — a minimal host for the plugin.
//
// Registers the plugin on an in-process channel registry, sends one encoded
// method call and prints the reply envelope on stdout. Logs go to stderr.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use zeb_bridge::FixedPlatform;
use zeb_core::error::Result;
use zeb_core::{MethodCall, MethodResponse, PluginConfig};
use zeb_plugin::{ChannelRegistry, ZebPermissionsHelperPlugin, codec};

use cli::Cli;

/// Printed when the handler has no behaviour for the method.
const NOT_IMPLEMENTED: &str = "<not implemented>";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PluginConfig::load(path),
        None => Ok(PluginConfig::default()),
    };
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| PluginConfig::default().log_filter);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load config");
            return ExitCode::FAILURE;
        }
    };
    if let Some(channel) = &cli.channel {
        config.channel_name = channel.clone();
    }

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "probe failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &PluginConfig) -> Result<ExitCode> {
    let registry = ChannelRegistry::new();
    match (&cli.platform, &cli.os_version) {
        (Some(name), Some(version)) => ZebPermissionsHelperPlugin::register_with_bridge(
            &registry,
            config,
            FixedPlatform::new(name.as_str(), version.as_str()),
        )?,
        _ => ZebPermissionsHelperPlugin::register(&registry, config)?,
    }

    let call = MethodCall::with_args(
        cli.method.as_str(),
        cli.args.clone().unwrap_or(Value::Null),
    );
    let message = codec::encode_call(&call)?;
    let reply = registry.invoke_encoded(&config.channel_name, &message)?;

    if reply.is_empty() {
        println!("{NOT_IMPLEMENTED}");
        return Ok(ExitCode::SUCCESS);
    }

    let response = codec::decode_envelope(&reply)?;
    println!("{}", String::from_utf8_lossy(&reply));
    Ok(match response {
        MethodResponse::Error { .. } => ExitCode::FAILURE,
        MethodResponse::Success(_) | MethodResponse::NotImplemented => ExitCode::SUCCESS,
    })
}
