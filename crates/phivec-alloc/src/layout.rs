// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Layout helpers shared by the backends.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Non-null pointer aligned to `layout`, standing in for a zero-sized block.
pub(crate) fn dangling(layout: Layout) -> NonNull<u8> {
    // Alignment is a non-zero power of two.
    NonNull::new(layout.align() as *mut u8).unwrap_or(NonNull::dangling())
}

/// `OutOfMemory` carrying the size and alignment of `layout`.
pub(crate) fn out_of_memory(layout: Layout) -> AllocError {
    AllocError::OutOfMemory {
        size: layout.size(),
        align: layout.align(),
    }
}

/// Layout of `old` resized to `new_size` bytes.
pub(crate) fn resized(old: Layout, new_size: usize) -> Result<Layout, AllocError> {
    Layout::from_size_align(new_size, old.align()).map_err(|_| AllocError::OutOfMemory {
        size: new_size,
        align: old.align(),
    })
}
