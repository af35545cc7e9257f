// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Header stored in front of the elements, inside the same allocation.
//!
//! ```text
//!  base                         handle
//!   |                             |
//!   v                             v
//!   +-----+-----+---------------+----+----+----+-----
//!   | len | cap |   padding     | e0 | e1 | e2 | ...
//!   +-----+-----+---------------+----+----+----+-----
//!   |<------ offset_of::<T>() ->|
//! ```
//!
//! The padding rounds the header up to `align_of::<T>()`, and the block is
//! aligned to the stricter of the header and the element, so `e0` is always
//! correctly aligned for `T`. Every header access goes through
//! `handle - offset_of::<T>()`.

use core::alloc::Layout;
use core::mem::{align_of, size_of};
use core::ptr::NonNull;

use crate::error::PhiVecError;

/// Length and capacity, in elements.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Header {
    pub(crate) len: usize,
    pub(crate) cap: usize,
}

/// Bytes from the start of the block to element 0.
pub(crate) const fn offset_of<T>() -> usize {
    let align = align_of::<T>();
    (size_of::<Header>() + align - 1) & !(align - 1)
}

/// Alignment of the whole block.
pub(crate) const fn block_align<T>() -> usize {
    let header = align_of::<Header>();
    let element = align_of::<T>();

    if header > element { header } else { element }
}

/// Layout of a block holding the header and `cap` elements.
pub(crate) fn layout_for<T>(cap: usize) -> Result<Layout, PhiVecError> {
    let elements = size_of::<T>()
        .checked_mul(cap)
        .ok_or(PhiVecError::CapacityOverflow)?;
    let size = offset_of::<T>()
        .checked_add(elements)
        .ok_or(PhiVecError::CapacityOverflow)?;

    Layout::from_size_align(size, block_align::<T>()).map_err(|_| PhiVecError::CapacityOverflow)
}

/// Handle for a block starting at `base`.
///
/// # Safety
///
/// `base` must point to a block laid out by `layout_for::<T>`.
#[inline(always)]
pub(crate) unsafe fn handle_from_base<T>(base: NonNull<u8>) -> NonNull<T> {
    // SAFETY: the block is at least offset_of::<T>() bytes long.
    unsafe { base.add(offset_of::<T>()).cast() }
}

/// Start of the block behind `handle`.
///
/// # Safety
///
/// `handle` must have been produced by `handle_from_base::<T>`.
#[inline(always)]
pub(crate) unsafe fn base_from_handle<T>(handle: NonNull<T>) -> NonNull<u8> {
    // SAFETY: the header lives offset_of::<T>() bytes before the handle.
    unsafe { handle.cast::<u8>().sub(offset_of::<T>()) }
}

/// Header behind `handle`.
///
/// # Safety
///
/// `handle` must have been produced by `handle_from_base::<T>` on a live
/// block.
#[inline(always)]
pub(crate) unsafe fn header_of<T>(handle: NonNull<T>) -> NonNull<Header> {
    // SAFETY: forwarded from the caller; the block start is aligned for Header.
    unsafe { base_from_handle(handle).cast() }
}
