// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::AllocError;
use crate::layout::{dangling, out_of_memory, resized};

fn layout(size: usize, align: usize) -> Layout {
    Layout::from_size_align(size, align).expect("Failed to Layout::from_size_align(..)")
}

// =============================================================================
// dangling()
// =============================================================================

#[test]
fn test_dangling_is_aligned() {
    for align in [1, 8, 64, 4096] {
        let ptr = dangling(layout(0, align));
        assert_eq!(ptr.as_ptr() as usize % align, 0);
    }
}

// =============================================================================
// out_of_memory()
// =============================================================================

#[test]
fn test_out_of_memory_carries_layout() {
    assert_eq!(
        out_of_memory(layout(48, 16)),
        AllocError::OutOfMemory {
            size: 48,
            align: 16
        }
    );
}

// =============================================================================
// resized()
// =============================================================================

#[test]
fn test_resized_keeps_alignment() {
    let new = resized(layout(16, 32), 96).expect("Failed to resized(..)");

    assert_eq!(new.size(), 96);
    assert_eq!(new.align(), 32);
}

#[test]
fn test_resized_rejects_oversized_request() {
    assert_eq!(
        resized(layout(16, 8), usize::MAX),
        Err(AllocError::OutOfMemory {
            size: usize::MAX,
            align: 8
        })
    );
}
