// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for phivec-alloc.

use core::fmt;

use thiserror::Error;

/// The three operations a backend exposes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AllocOp {
    /// Zero-initializing allocation.
    ZeroAlloc,
    /// Uninitialized allocation.
    Alloc,
    /// Resize of an existing allocation.
    Realloc,
}

impl fmt::Display for AllocOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ZeroAlloc => "zero_alloc",
            Self::Alloc => "alloc",
            Self::Realloc => "realloc",
        };

        f.write_str(name)
    }
}

/// Why a backend could not satisfy a request.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The backend has no memory left for the request.
    #[error("out of memory ({size} bytes, align {align})")]
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment.
        align: usize,
    },

    /// The backend cannot honor the requested alignment.
    #[error("unsupported alignment {align}")]
    UnsupportedAlignment {
        /// Requested alignment.
        align: usize,
    },
}

/// A failed backend operation, as reported by the fail-fast policy.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("{op} of {size} bytes failed: {error}")]
pub struct AllocFailure {
    /// Which operation failed.
    pub op: AllocOp,
    /// Size in bytes the operation asked for.
    pub size: usize,
    /// Underlying backend error.
    pub error: AllocError,
}

impl AllocFailure {
    /// Creates a failure record.
    pub fn new(op: AllocOp, size: usize, error: AllocError) -> Self {
        Self { op, size, error }
    }
}
