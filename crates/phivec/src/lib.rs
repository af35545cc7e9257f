// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable vector with an in-allocation header and golden-ratio growth.
//!
//! `PhiVec<T>` keeps its length and capacity in a header stored right
//! before element 0, inside the same allocation. The value itself is a
//! single pointer to the first element.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) append**: when full, capacity grows to
//!   `ceil((len + n) · φ)` with `φ = (1 + √5) / 2`.
//! - **Memory is given back**: after a removal, if `len / capacity < 1/φ`
//!   the buffer shrinks to fit. `clear()` keeps the capacity.
//! - **Aligned elements**: the header is padded to `align_of::<T>()`, so
//!   element 0 is correctly aligned for any `T`.
//! - **Fail-fast allocation**: the infallible API never sees a failed
//!   allocation; the backend reports it on stderr and aborts. Every
//!   operation also has a `try_*` form returning [`PhiVecError`].
//! - **Substitutable backend**: all memory goes through a
//!   [`RawAlloc`](alloc::RawAlloc) chosen as a type parameter.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use phivec::PhiVec;
//!
//! let mut vec = PhiVec::new();
//! for i in 0..10u32 {
//!     vec.push(i);
//! }
//!
//! vec.insert(0, 100);
//! assert_eq!(vec.at(0), 100);
//! assert_eq!(vec.len(), 11);
//!
//! assert_eq!(vec.remove(0), 100);
//! assert_eq!(vec.pop(), Some(9));
//! ```
//!
//! # Example: Recoverable Errors
//!
//! ```rust
//! use phivec::{PhiVec, PhiVecError};
//!
//! let mut vec = PhiVec::from_slice(&[1u8, 2, 3]);
//!
//! assert_eq!(
//!     vec.try_insert(7, 0),
//!     Err(PhiVecError::InvalidPosition { pos: 7, len: 3 })
//! );
//! assert_eq!(
//!     vec.try_erase_range(2, 1),
//!     Err(PhiVecError::InvalidRange { start: 2, end: 1, len: 3 })
//! );
//! ```
//!
//! # Example: Instrumented Backend
//!
//! ```rust
//! use phivec::PhiVec;
//! use phivec::alloc::{Counting, Heap};
//!
//! let backend = Counting::new(Heap);
//! {
//!     let mut vec = PhiVec::new_in(&backend);
//!     vec.extend(0..100u64);
//! }
//!
//! let stats = backend.stats();
//! assert_eq!(stats.zero_allocs, 1);
//! assert_eq!(stats.live_bytes, 0);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod header;
mod mutation;
mod vec;
mod zeroable;

pub mod policy;

pub use phivec_alloc as alloc;

pub use error::PhiVecError;
pub use phivec_alloc::{Heap, RawAlloc};
pub use vec::PhiVec;
pub use zeroable::Zeroable;
