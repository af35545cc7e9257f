// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Substitutable allocation backends with a fail-fast default.
//!
//! Every byte a `PhiVec` owns goes through a [`RawAlloc`] backend. A backend
//! provides three operations (zero-initializing allocation, allocation and
//! reallocation) plus deallocation. Each operation has a fallible form
//! (`try_*`) and an infallible form that either returns a valid pointer or
//! terminates the process.
//!
//! # Backends
//!
//! - [`Heap`]: the global allocator. Default.
//! - [`PageAlloc`] (unix, `page` feature): one anonymous `mmap` per block,
//!   resized with `mremap` on Linux.
//! - [`Counting`]: wraps another backend and records calls and live bytes.
//! - [`Faulty`] (`test_utils` feature): wraps another backend and refuses
//!   selected operations.
//!
//! # Fail-fast policy
//!
//! When an infallible operation fails, [`RawAlloc::on_failure`] is invoked.
//! The provided implementation writes a line naming the failed operation to
//! stderr and aborts:
//!
//! ```text
//! phivec: realloc of 4096 bytes failed: out of memory (4096 bytes, align 8)
//! ```
//!
//! # Example: Substituting a Backend
//!
//! ```rust
//! use core::alloc::Layout;
//! use phivec_alloc::{Counting, Heap, RawAlloc};
//!
//! let backend = Counting::new(Heap);
//! let layout = Layout::from_size_align(32, 8).unwrap();
//!
//! let ptr = backend.alloc_zeroed(layout);
//! let ptr = unsafe { backend.realloc(ptr, layout, 64) };
//! unsafe { backend.dealloc(ptr, Layout::from_size_align(64, 8).unwrap()) };
//!
//! let stats = backend.stats();
//! assert_eq!(stats.zero_allocs, 1);
//! assert_eq!(stats.reallocs, 1);
//! assert_eq!(stats.live_bytes, 0);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod abort;
mod counting;
mod error;
mod heap;
mod layout;
mod traits;

#[cfg(any(test, feature = "test_utils"))]
mod faulty;

#[cfg(all(unix, feature = "page"))]
mod page;

pub use abort::{DIAGNOSTIC_PREFIX, diagnostic, fail_fast};
pub use counting::{AllocStats, Counting};
pub use error::{AllocError, AllocFailure, AllocOp};
pub use heap::Heap;
pub use traits::RawAlloc;

#[cfg(any(test, feature = "test_utils"))]
pub use faulty::{AllocBehaviour, Faulty};

#[cfg(all(unix, feature = "page"))]
pub use page::PageAlloc;
