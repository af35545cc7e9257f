// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Re-running an ignored test in a child process, for paths that abort.

use std::process::Command;

/// How an ignored test ended when run on its own.
#[derive(Debug)]
pub struct SubprocessOutcome {
    /// Exit code, `None` when the child was killed by a signal (abort).
    pub exit_code: Option<i32>,
    /// Whether the child exited successfully.
    pub success: bool,
    /// Whether the named test was found and run.
    pub ran: bool,
    /// Everything the child wrote to stderr.
    pub stderr: String,
}

/// Runs `test_name` (an `#[ignore]`d test in the current test binary) in a
/// child process and reports how it ended.
pub fn run_test_as_subprocess(test_name: &str) -> SubprocessOutcome {
    let exe = std::env::current_exe().expect("Failed to current_exe()");
    let output = Command::new(exe)
        .args([
            "--exact",
            test_name,
            "--ignored",
            "--test-threads=1",
            "--nocapture",
        ])
        .output()
        .expect("Failed to run subprocess");

    let stdout = String::from_utf8_lossy(&output.stdout);

    SubprocessOutcome {
        exit_code: output.status.code(),
        success: output.status.success(),
        ran: !stdout.contains("running 0 tests"),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
