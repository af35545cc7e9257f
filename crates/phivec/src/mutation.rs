// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Push, pop, insert and erase.
//!
//! Insertions run the grow check before touching any element; removals
//! run the shrink check after the length has been updated. Tails are
//! shifted with `ptr::copy`, which handles the overlap between source and
//! destination.

use core::ptr;

use phivec_alloc::RawAlloc;

use crate::error::PhiVecError;
use crate::vec::{OnFailure, PhiVec};

impl<T: Copy, A: RawAlloc> PhiVec<T, A> {
    fn push_with(&mut self, value: T, on_failure: OnFailure) -> Result<(), PhiVecError> {
        self.grow_for(1, on_failure)?;

        let len = self.len();
        // SAFETY: grow_for guarantees len < capacity.
        unsafe { self.slot(len).write(value) };
        self.set_len(len + 1);

        Ok(())
    }

    fn pop_with(&mut self, on_failure: OnFailure) -> Result<T, PhiVecError> {
        let len = self.len();

        if len == 0 {
            return Err(PhiVecError::Empty);
        }

        // SAFETY: len - 1 is the last initialized slot.
        let value = unsafe { self.slot(len - 1).read() };
        self.set_len(len - 1);
        self.shrink_check(on_failure);

        Ok(value)
    }

    fn insert_slice_with(
        &mut self,
        pos: usize,
        data: &[T],
        on_failure: OnFailure,
    ) -> Result<(), PhiVecError> {
        let len = self.len();

        if pos > len {
            return Err(PhiVecError::InvalidPosition { pos, len });
        }

        let count = data.len();
        self.grow_for(count, on_failure)?;

        // SAFETY: capacity >= len + count after grow_for. `data` is a shared
        // borrow that cannot point into `self` while we hold &mut self.
        unsafe {
            let at = self.slot(pos);
            ptr::copy(at, at.add(count), len - pos);
            ptr::copy_nonoverlapping(data.as_ptr(), at, count);
        }
        self.set_len(len + count);

        Ok(())
    }

    fn erase_range_with(
        &mut self,
        start: usize,
        end: usize,
        on_failure: OnFailure,
    ) -> Result<(), PhiVecError> {
        let len = self.len();

        if start > end || end > len {
            return Err(PhiVecError::InvalidRange { start, end, len });
        }

        if start == end {
            return Ok(());
        }

        // SAFETY: start < end <= len, so both ranges are initialized slots.
        unsafe { ptr::copy(self.slot(end), self.slot(start), len - end) };
        self.set_len(len - (end - start));
        self.shrink_check(on_failure);

        Ok(())
    }

    /// Appends `value`, growing by φ if the vector is full.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phivec::PhiVec;
    ///
    /// let mut vec = PhiVec::new();
    /// let mut capacities = Vec::new();
    ///
    /// for i in 0..6u32 {
    ///     vec.push(i);
    ///     capacities.push(vec.capacity());
    /// }
    ///
    /// assert_eq!(capacities, [2, 2, 5, 5, 5, 10]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.push_with(value, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`push`](Self::push). On error the vector is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), PhiVecError> {
        self.push_with(value, OnFailure::Report)
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Shrinks to fit afterwards if the load factor dropped below `1/φ`.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with(OnFailure::Abort).ok()
    }

    /// Like [`pop`](Self::pop), but reports `Empty` and allocation failure
    /// as errors. A refused shrink is not an error.
    pub fn try_pop(&mut self) -> Result<T, PhiVecError> {
        self.pop_with(OnFailure::Report)
    }

    /// Inserts `value` at `pos`, shifting `pos..len` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: T) {
        self.insert_slice_with(pos, &[value], OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`insert`](Self::insert). On error the vector is unchanged.
    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<(), PhiVecError> {
        self.insert_slice_with(pos, &[value], OnFailure::Report)
    }

    /// Inserts a copy of `data` at `pos`, shifting the tail right by
    /// `data.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phivec::PhiVec;
    ///
    /// let mut vec = PhiVec::from_slice(&['a', 'e']);
    /// vec.insert_slice(1, &['b', 'c', 'd']);
    ///
    /// assert_eq!(vec, ['a', 'b', 'c', 'd', 'e']);
    /// ```
    #[track_caller]
    pub fn insert_slice(&mut self, pos: usize, data: &[T]) {
        self.insert_slice_with(pos, data, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`insert_slice`](Self::insert_slice).
    pub fn try_insert_slice(&mut self, pos: usize, data: &[T]) -> Result<(), PhiVecError> {
        self.insert_slice_with(pos, data, OnFailure::Report)
    }

    /// Inserts every element of `other` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert_vec<B: RawAlloc>(&mut self, pos: usize, other: &PhiVec<T, B>) {
        self.insert_slice(pos, other.as_slice())
    }

    /// Fallible [`insert_vec`](Self::insert_vec).
    pub fn try_insert_vec<B: RawAlloc>(
        &mut self,
        pos: usize,
        other: &PhiVec<T, B>,
    ) -> Result<(), PhiVecError> {
        self.try_insert_slice(pos, other.as_slice())
    }

    /// Appends a copy of `data`.
    pub fn extend_from_slice(&mut self, data: &[T]) {
        let len = self.len();
        self.insert_slice(len, data)
    }

    /// Fallible [`extend_from_slice`](Self::extend_from_slice).
    pub fn try_extend_from_slice(&mut self, data: &[T]) -> Result<(), PhiVecError> {
        let len = self.len();
        self.try_insert_slice(len, data)
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    #[track_caller]
    pub fn remove(&mut self, pos: usize) -> T {
        self.try_remove_with(pos, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`remove`](Self::remove).
    pub fn try_remove(&mut self, pos: usize) -> Result<T, PhiVecError> {
        self.try_remove_with(pos, OnFailure::Report)
    }

    fn try_remove_with(&mut self, pos: usize, on_failure: OnFailure) -> Result<T, PhiVecError> {
        let len = self.len();

        if pos >= len {
            return Err(PhiVecError::OutOfBounds { index: pos, len });
        }

        // SAFETY: pos < len.
        let value = unsafe { self.slot(pos).read() };
        self.erase_range_with(pos, pos + 1, on_failure)?;

        Ok(value)
    }

    /// Removes `start..end`, shifting the tail left by `end - start`.
    ///
    /// An empty range changes nothing.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phivec::PhiVec;
    ///
    /// let mut vec = PhiVec::from_slice(&[1, 2, 3, 4]);
    /// vec.erase_range(1, 3);
    ///
    /// assert_eq!(vec, [1, 4]);
    /// ```
    #[track_caller]
    pub fn erase_range(&mut self, start: usize, end: usize) {
        self.erase_range_with(start, end, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`erase_range`](Self::erase_range).
    pub fn try_erase_range(&mut self, start: usize, end: usize) -> Result<(), PhiVecError> {
        self.erase_range_with(start, end, OnFailure::Report)
    }
}
