// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::abort::fail_fast;
use crate::error::{AllocError, AllocFailure, AllocOp};

/// Backend used by `PhiVec` for every byte it owns.
///
/// Implementors provide the four fallible primitives. The infallible
/// `alloc_zeroed`, `alloc` and `realloc` either return a valid pointer or
/// diverge through [`on_failure`](RawAlloc::on_failure), which by default
/// prints a diagnostic and aborts the process.
///
/// # Safety
///
/// A successful `try_*` call must return a pointer to at least
/// `layout.size()` (or `new_size`) bytes aligned to `layout.align()`, valid
/// until it is passed to `try_realloc` or `dealloc` on the same backend.
/// `try_alloc_zeroed` must return zero-filled memory. `try_realloc` must
/// preserve the first `min(old.size(), new_size)` bytes and, on error,
/// leave the original block untouched.
pub unsafe trait RawAlloc {
    /// Allocates zero-initialized memory for `layout`.
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Allocates uninitialized memory for `layout`.
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Resizes the block at `ptr` to `new_size` bytes, keeping `old.align()`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from this backend with layout `old`, and `new_size`
    /// must be a valid size for `old.align()`.
    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from this backend with layout `layout` and must not
    /// be used afterwards.
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout);

    /// Called when an infallible operation fails. Never returns.
    fn on_failure(&self, failure: AllocFailure) -> ! {
        fail_fast(failure)
    }

    /// Zero-initializing allocation, fail-fast.
    fn alloc_zeroed(&self, layout: Layout) -> NonNull<u8> {
        match self.try_alloc_zeroed(layout) {
            Ok(ptr) => ptr,
            Err(e) => self.on_failure(AllocFailure::new(AllocOp::ZeroAlloc, layout.size(), e)),
        }
    }

    /// Uninitialized allocation, fail-fast.
    fn alloc(&self, layout: Layout) -> NonNull<u8> {
        match self.try_alloc(layout) {
            Ok(ptr) => ptr,
            Err(e) => self.on_failure(AllocFailure::new(AllocOp::Alloc, layout.size(), e)),
        }
    }

    /// Reallocation, fail-fast.
    ///
    /// # Safety
    ///
    /// Same contract as [`try_realloc`](RawAlloc::try_realloc).
    unsafe fn realloc(&self, ptr: NonNull<u8>, old: Layout, new_size: usize) -> NonNull<u8> {
        // SAFETY: forwarded from the caller.
        match unsafe { self.try_realloc(ptr, old, new_size) } {
            Ok(ptr) => ptr,
            Err(e) => self.on_failure(AllocFailure::new(AllocOp::Realloc, new_size, e)),
        }
    }
}

// SAFETY: every call is forwarded to `A`, which upholds the contract.
unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).try_alloc_zeroed(layout)
    }

    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).try_alloc(layout)
    }

    #[inline]
    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: forwarded from the caller.
        unsafe { (**self).try_realloc(ptr, old, new_size) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller.
        unsafe { (**self).dealloc(ptr, layout) }
    }

    fn on_failure(&self, failure: AllocFailure) -> ! {
        (**self).on_failure(failure)
    }
}
