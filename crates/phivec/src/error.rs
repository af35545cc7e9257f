// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for phivec.

use phivec_alloc::AllocFailure;
use thiserror::Error;

/// Error type for the recoverable (`try_*`) operations of `PhiVec`.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum PhiVecError {
    /// Element access past the end.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Insertion position past the end.
    #[error("insertion position {pos} exceeds length {len}")]
    InvalidPosition {
        /// Requested position.
        pos: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Range not contained in `0..=len` or reversed.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Removal from an empty vector.
    #[error("vector is empty")]
    Empty,

    /// The requested capacity does not fit in the address space.
    ///
    /// Covers both `len + delta` overflowing `usize` and a byte size that
    /// no `Layout` can describe.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The backend refused an allocation.
    #[error("{0}")]
    Alloc(#[from] AllocFailure),
}

impl PhiVecError {
    /// Panics with this error. Used by the infallible API.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}
