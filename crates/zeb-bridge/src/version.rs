// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Version string formatting shared by the native bridges.

/// Render numeric OS version components the way UIKit does: `major.minor`,
/// with `.patch` appended only when it is non-zero.
pub fn format_os_version(major: i64, minor: i64, patch: i64) -> String {
    if patch == 0 {
        format!("{major}.{minor}")
    } else {
        format!("{major}.{minor}.{patch}")
    }
}
