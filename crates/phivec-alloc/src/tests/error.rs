// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AllocError, AllocFailure, AllocOp};

#[test]
fn test_alloc_op_display() {
    assert_eq!(AllocOp::ZeroAlloc.to_string(), "zero_alloc");
    assert_eq!(AllocOp::Alloc.to_string(), "alloc");
    assert_eq!(AllocOp::Realloc.to_string(), "realloc");
}

#[test]
fn test_alloc_failure_names_operation_and_size() {
    let failure = AllocFailure::new(
        AllocOp::Realloc,
        4096,
        AllocError::OutOfMemory {
            size: 4096,
            align: 8,
        },
    );

    assert_eq!(
        failure.to_string(),
        "realloc of 4096 bytes failed: out of memory (4096 bytes, align 8)"
    );
}

#[test]
fn test_unsupported_alignment_display() {
    let error = AllocError::UnsupportedAlignment { align: 1 << 20 };
    assert_eq!(error.to_string(), "unsupported alignment 1048576");
}
