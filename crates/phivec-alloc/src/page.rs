// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PageAlloc - anonymous mmap backend.
//!
//! Every block is its own private anonymous mapping rounded up to whole
//! pages. Fresh mappings are zero-filled by the kernel, so `alloc` and
//! `alloc_zeroed` are the same call. On Linux, resizing uses `mremap` and
//! may move the block without copying.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::AllocError;
use crate::layout::{dangling, out_of_memory, resized};
use crate::traits::RawAlloc;

/// Backend that maps every allocation directly from the kernel.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PageAlloc;

impl PageAlloc {
    /// Returns the system page size.
    pub fn page_size() -> usize {
        // SAFETY: sysconf has no preconditions.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

        if size <= 0 { 4096 } else { size as usize }
    }

    /// Bytes actually mapped for a request of `size` bytes.
    pub fn mapped_len(size: usize) -> Option<usize> {
        let page = Self::page_size();
        size.checked_add(page - 1).map(|n| n & !(page - 1))
    }

    fn map(layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.align() > Self::page_size() {
            return Err(AllocError::UnsupportedAlignment {
                align: layout.align(),
            });
        }

        if layout.size() == 0 {
            return Ok(dangling(layout));
        }

        let len = Self::mapped_len(layout.size()).ok_or(out_of_memory(layout))?;

        // SAFETY: anonymous private mapping, no file descriptor involved.
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(out_of_memory(layout));
        }

        NonNull::new(ptr as *mut u8).ok_or(out_of_memory(layout))
    }

    /// # Safety
    ///
    /// `ptr` must be a live mapping created by `map` for `size` bytes.
    unsafe fn unmap(ptr: NonNull<u8>, size: usize) {
        if size == 0 {
            return;
        }

        if let Some(len) = Self::mapped_len(size) {
            // SAFETY: ptr/len describe a mapping created by `map`.
            unsafe { libc::munmap(ptr.as_ptr() as *mut libc::c_void, len) };
        }
    }

    #[cfg(target_os = "linux")]
    unsafe fn remap(
        ptr: NonNull<u8>,
        old: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<u8>, AllocError> {
        let old_len = Self::mapped_len(old.size()).ok_or(out_of_memory(old))?;
        let new_len = Self::mapped_len(new_layout.size()).ok_or(out_of_memory(new_layout))?;

        // SAFETY: ptr/old_len describe a live mapping; MREMAP_MAYMOVE keeps
        // the original mapping intact on failure.
        let new_ptr = unsafe {
            libc::mremap(
                ptr.as_ptr() as *mut libc::c_void,
                old_len,
                new_len,
                libc::MREMAP_MAYMOVE,
            )
        };

        if new_ptr == libc::MAP_FAILED {
            return Err(out_of_memory(new_layout));
        }

        NonNull::new(new_ptr as *mut u8).ok_or(out_of_memory(new_layout))
    }

    #[cfg(not(target_os = "linux"))]
    unsafe fn remap(
        ptr: NonNull<u8>,
        old: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<u8>, AllocError> {
        let new_ptr = Self::map(new_layout)?;

        // SAFETY: both blocks are live, distinct, and at least this long.
        unsafe {
            ptr::copy_nonoverlapping(
                ptr.as_ptr(),
                new_ptr.as_ptr(),
                old.size().min(new_layout.size()),
            );
            Self::unmap(ptr, old.size());
        }

        Ok(new_ptr)
    }
}

// SAFETY: mappings are page aligned (alignment above a page is rejected),
// zero-filled on creation, and only unmapped through `dealloc`/`try_realloc`.
unsafe impl RawAlloc for PageAlloc {
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        Self::map(layout)
    }

    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        Self::map(layout)
    }

    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let new_layout = resized(old, new_size)?;

        if old.size() == 0 {
            return Self::map(new_layout);
        }

        if new_size == 0 {
            // SAFETY: ptr is a live mapping of old.size() bytes.
            unsafe { Self::unmap(ptr, old.size()) };
            return Ok(dangling(new_layout));
        }

        if Self::mapped_len(old.size()) == Self::mapped_len(new_size) {
            return Ok(ptr);
        }

        // SAFETY: ptr is a live mapping of old.size() bytes.
        unsafe { Self::remap(ptr, old, new_layout) }
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller.
        unsafe { Self::unmap(ptr, layout.size()) }
    }
}
