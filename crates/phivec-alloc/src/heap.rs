// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Heap - the process-wide global allocator.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::layout::{dangling, out_of_memory, resized};
use crate::traits::RawAlloc;

/// Backend over the global allocator (`std::alloc`).
///
/// Zero-sized requests never reach the global allocator; they yield a
/// dangling pointer aligned to the layout.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Heap;

// SAFETY: all non-empty blocks come from and return to `std::alloc` with the
// layout they were created with.
unsafe impl RawAlloc for Heap {
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling(layout));
        }

        // SAFETY: layout has non-zero size.
        let ptr = unsafe { std::alloc::alloc_zeroed(layout) };
        NonNull::new(ptr).ok_or_else(|| out_of_memory(layout))
    }

    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling(layout));
        }

        // SAFETY: layout has non-zero size.
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or_else(|| out_of_memory(layout))
    }

    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let new_layout = resized(old, new_size)?;

        if old.size() == 0 {
            return self.try_alloc(new_layout);
        }

        if new_size == 0 {
            // SAFETY: ptr is a live non-empty block with layout `old`.
            unsafe { std::alloc::dealloc(ptr.as_ptr(), old) };
            return Ok(dangling(new_layout));
        }

        // SAFETY: ptr is a live non-empty block with layout `old`, new_size is
        // non-zero and valid for old.align() (checked above).
        let new_ptr = unsafe { std::alloc::realloc(ptr.as_ptr(), old, new_size) };
        NonNull::new(new_ptr).ok_or_else(|| out_of_memory(new_layout))
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }

        // SAFETY: caller guarantees ptr is a live block with this layout.
        unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
