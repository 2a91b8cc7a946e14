// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "zeb-probe")]
#[command(about = "Send one method call through the zeb permissions helper plugin")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Method name to invoke
    #[arg(default_value = "getPlatformVersion")]
    pub method: String,

    /// JSON argument payload (ignored by getPlatformVersion)
    #[arg(long, value_parser = parse_json)]
    pub args: Option<Value>,

    /// Channel to send the call on (overrides the config file)
    #[arg(long)]
    pub channel: Option<String>,

    /// Plugin config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report this platform name instead of asking the OS
    #[arg(long, requires = "os_version")]
    pub platform: Option<String>,

    /// Report this OS version instead of asking the OS
    #[arg(long, requires = "platform")]
    pub os_version: Option<String>,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn method_defaults_to_platform_version() {
        let cli = Cli::try_parse_from(["zeb-probe"]).expect("parse");
        assert_eq!(cli.method, "getPlatformVersion");
        assert!(cli.args.is_none());
    }

    #[test]
    fn args_are_parsed_as_json() {
        let argv = ["zeb-probe", "setBrightness", "--args", r#"{"level":0.5}"#];
        let cli = Cli::try_parse_from(argv).expect("parse");
        assert_eq!(cli.method, "setBrightness");
        assert_eq!(cli.args, Some(json!({ "level": 0.5 })));
    }

    #[test]
    fn invalid_json_args_are_rejected() {
        assert!(Cli::try_parse_from(["zeb-probe", "--args", "{oops"]).is_err());
    }

    #[test]
    fn platform_override_needs_both_flags() {
        assert!(Cli::try_parse_from(["zeb-probe", "--platform", "iOS"]).is_err());
        assert!(Cli::try_parse_from(["zeb-probe", "--os-version", "17.0"]).is_err());

        let argv = ["zeb-probe", "--platform", "iOS", "--os-version", "17.0"];
        let cli = Cli::try_parse_from(argv).expect("parse");
        assert_eq!(cli.platform.as_deref(), Some("iOS"));
        assert_eq!(cli.os_version.as_deref(), Some("17.0"));
    }
}
