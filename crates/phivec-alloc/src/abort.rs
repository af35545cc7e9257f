// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Default fail-fast policy.

use std::io::Write;

use crate::error::AllocFailure;

/// Prefix of every diagnostic written before aborting.
pub const DIAGNOSTIC_PREFIX: &str = "phivec:";

/// Formats the line written to stderr for `failure`.
pub fn diagnostic(failure: &AllocFailure) -> String {
    format!("{DIAGNOSTIC_PREFIX} {failure}")
}

/// Reports `failure` on stderr and terminates the process.
///
/// Nothing is unwound and nothing is returned to the caller. The write is
/// best-effort: a closed stderr does not prevent the abort.
#[cold]
#[inline(never)]
pub fn fail_fast(failure: AllocFailure) -> ! {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", diagnostic(&failure));
    let _ = stderr.flush();

    std::process::abort()
}
