// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Faulty - fault injection for exercising allocation-failure paths.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::{AllocError, AllocFailure};
use crate::heap::Heap;
use crate::traits::RawAlloc;

/// Failure injected by [`Faulty`].
///
/// The behaviour is sticky: once set, it stays active until changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocBehaviour {
    /// Forward every call.
    #[default]
    None,
    /// Refuse zero-initializing allocations.
    FailAtZeroAlloc,
    /// Refuse uninitialized allocations.
    FailAtAlloc,
    /// Refuse reallocations.
    FailAtRealloc,
    /// Refuse everything except deallocation.
    FailAlways,
}

/// Backend that fails on demand and otherwise forwards to `inner`.
///
/// # Example
///
/// ```rust
/// use core::alloc::Layout;
/// use phivec_alloc::{AllocBehaviour, Faulty, Heap, RawAlloc};
///
/// let faulty = Faulty::new(Heap);
/// let layout = Layout::from_size_align(16, 8).unwrap();
///
/// faulty.change_behaviour(AllocBehaviour::FailAtAlloc);
/// assert!(faulty.try_alloc(layout).is_err());
///
/// faulty.change_behaviour(AllocBehaviour::None);
/// let ptr = faulty.try_alloc(layout).unwrap();
/// unsafe { faulty.dealloc(ptr, layout) };
/// ```
#[derive(Debug, Default)]
pub struct Faulty<A = Heap> {
    inner: A,
    behaviour: Cell<AllocBehaviour>,
}

impl<A> Faulty<A> {
    /// Wraps `inner` with no failure injected.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            behaviour: Cell::new(AllocBehaviour::None),
        }
    }

    /// Changes the injected failure.
    pub fn change_behaviour(&self, behaviour: AllocBehaviour) {
        self.behaviour.set(behaviour);
    }

    /// Returns the injected failure.
    pub fn behaviour(&self) -> AllocBehaviour {
        self.behaviour.get()
    }

    fn refuses(&self, target: AllocBehaviour) -> bool {
        let current = self.behaviour.get();
        current == target || current == AllocBehaviour::FailAlways
    }
}

fn injected(size: usize, align: usize) -> AllocError {
    AllocError::OutOfMemory { size, align }
}

// SAFETY: successful calls are forwarded to `inner` unchanged; refused calls
// touch no memory.
unsafe impl<A: RawAlloc> RawAlloc for Faulty<A> {
    fn try_alloc_zeroed(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if self.refuses(AllocBehaviour::FailAtZeroAlloc) {
            return Err(injected(layout.size(), layout.align()));
        }

        self.inner.try_alloc_zeroed(layout)
    }

    fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if self.refuses(AllocBehaviour::FailAtAlloc) {
            return Err(injected(layout.size(), layout.align()));
        }

        self.inner.try_alloc(layout)
    }

    unsafe fn try_realloc(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        if self.refuses(AllocBehaviour::FailAtRealloc) {
            return Err(injected(new_size, old.align()));
        }

        // SAFETY: forwarded from the caller.
        unsafe { self.inner.try_realloc(ptr, old, new_size) }
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller.
        unsafe { self.inner.dealloc(ptr, layout) }
    }

    fn on_failure(&self, failure: AllocFailure) -> ! {
        self.inner.on_failure(failure)
    }
}
