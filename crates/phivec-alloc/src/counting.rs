// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counting - instrumentation wrapper around another backend.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::{AllocError, AllocFailure};
use crate::heap::Heap;
use crate::traits::RawAlloc;

/// Snapshot of the counters kept by [`Counting`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AllocStats {
    /// Successful zero-initializing allocations.
    pub zero_allocs: usize,
    /// Successful uninitialized allocations.
    pub allocs: usize,
    /// Successful reallocations.
    pub reallocs: usize,
    /// Deallocations.
    pub deallocs: usize,
    /// Requests the inner backend refused.
    pub failures: usize,
    /// Blocks allocated and not yet released.
    pub live_blocks: usize,
    /// Bytes currently held by live blocks.
    pub live_bytes: usize,
    /// High-water mark of `live_bytes`.
    pub peak_bytes: usize,
}

/// Wraps a backend and records every call made through it.
///
/// Counters use `Cell`, so a `Counting` is not `Sync`. Share it between
/// vectors by reference (`RawAlloc` is implemented for `&A`).
///
/// # Example
///
/// ```rust
/// use core::alloc::Layout;
/// use phivec_alloc::{Counting, Heap, RawAlloc};
///
/// let counting = Counting::new(Heap);
/// let layout = Layout::from_size_align(64, 8).unwrap();
/// let ptr = counting.alloc(layout);
///
/// assert_eq!(counting.stats().live_bytes, 64);
///
/// unsafe { counting.dealloc(ptr, layout) };
/// assert_eq!(counting.stats().live_blocks, 0);
/// ```
#[derive(Debug, Default)]
pub struct Counting<A = Heap> {
    inner: A,
    stats: Cell<AllocStats>,
}

impl<A> Counting<A> {
    /// Wraps `inner` with all counters at zero.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            stats: Cell::new(AllocStats::default()),
        }
    }

    /// Returns the current counters.
    pub fn stats(&self) -> AllocStats {
        self.stats.get()
    }

    /// Resets every counter except `live_blocks` and `live_bytes`.
    pub fn reset(&self) {
        let AllocStats {
            live_blocks,
            live_bytes,
            ..
        } = self.stats.get();

        self.stats.set(AllocStats {
            live_blocks,
            live_bytes,
            peak_bytes: live_bytes,
            ..AllocStats::default()
        });
    }

    /// Returns the wrapped backend.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn update(&self, f: impl FnOnce(&mut AllocStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        stats.peak_bytes = stats.peak_bytes.max(stats.live_bytes);
        self.stats.set(stats);
    }

    fn record<T>(
        &self,
        result: Result<T, AllocError>,
        on_ok: impl FnOnce(&mut AllocStats),
    ) -> Result<T, AllocError> {
        match &result {
            Ok(_) => self.update(on_ok),
            Err(_) => self.update(|s| s.failures += 1),
        }

        result
    }
}

// SAFETY: every block is produced and released by `inner`; only counters
// are added.
unsafe impl<A: RawAlloc> RawAlloc for Counting<A> {
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        self.record(self.inner.try_alloc_zeroed(layout), |s| {
            s.zero_allocs += 1;
            s.live_blocks += 1;
            s.live_bytes += layout.size();
        })
    }

    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        self.record(self.inner.try_alloc(layout), |s| {
            s.allocs += 1;
            s.live_blocks += 1;
            s.live_bytes += layout.size();
        })
    }

    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: forwarded from the caller.
        let result = unsafe { self.inner.try_realloc(ptr, old, new_size) };

        self.record(result, |s| {
            s.reallocs += 1;
            s.live_bytes = s.live_bytes.saturating_sub(old.size()) + new_size;
        })
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller.
        unsafe { self.inner.dealloc(ptr, layout) };

        self.update(|s| {
            s.deallocs += 1;
            s.live_blocks = s.live_blocks.saturating_sub(1);
            s.live_bytes = s.live_bytes.saturating_sub(layout.size());
        });
    }

    fn on_failure(&self, failure: AllocFailure) -> ! {
        self.inner.on_failure(failure)
    }
}
