// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use phivec_alloc::{AllocFailure, AllocOp, Heap, RawAlloc};

use crate::error::PhiVecError;
use crate::header::{self, Header};
use crate::policy;
use crate::zeroable::Zeroable;

/// What to do when the backend refuses a request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum OnFailure {
    /// Go through the backend's fail-fast path.
    Abort,
    /// Return the failure to the caller.
    Report,
}

/// Growable contiguous buffer whose length and capacity live in a header
/// placed right before the first element, inside the same allocation.
///
/// A `PhiVec` is a single pointer to element 0 plus the backend `A`
/// (zero-sized for [`Heap`]). Growth follows the golden ratio: when an
/// insertion needs `len + n > capacity`, the new capacity is
/// `ceil((len + n) · φ)`. After a removal, if `len / capacity < 1/φ` the
/// buffer shrinks to fit.
///
/// Elements are `Copy`: they are moved with plain memory copies and never
/// dropped.
///
/// Every operation that can change capacity may move the buffer. Mutations
/// take `&mut self`, so no reference into the old buffer can outlive them.
///
/// # Example
///
/// ```rust
/// use phivec::PhiVec;
///
/// let mut vec = PhiVec::new();
/// vec.push(1u32);
/// vec.push(3);
/// vec.insert(1, 2);
///
/// assert_eq!(vec, [1, 2, 3]);
/// assert_eq!(vec.capacity(), 5);
///
/// vec.erase_range(0, 2);
/// assert_eq!(vec, [3]);
/// assert_eq!(vec.capacity(), 1);
/// ```
pub struct PhiVec<T: Copy, A: RawAlloc = Heap> {
    handle: NonNull<T>,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: PhiVec owns its elements exclusively; sharing follows T and A.
unsafe impl<T: Copy + Send, A: RawAlloc + Send> Send for PhiVec<T, A> {}
// SAFETY: &PhiVec only hands out &T and &A.
unsafe impl<T: Copy + Sync, A: RawAlloc + Sync> Sync for PhiVec<T, A> {}

fn allocate<A: RawAlloc>(
    alloc: &A,
    layout: Layout,
    zeroed: bool,
    on_failure: OnFailure,
) -> Result<NonNull<u8>, PhiVecError> {
    match (on_failure, zeroed) {
        (OnFailure::Abort, true) => Ok(alloc.alloc_zeroed(layout)),
        (OnFailure::Abort, false) => Ok(alloc.alloc(layout)),
        (OnFailure::Report, true) => alloc
            .try_alloc_zeroed(layout)
            .map_err(|e| AllocFailure::new(AllocOp::ZeroAlloc, layout.size(), e).into()),
        (OnFailure::Report, false) => alloc
            .try_alloc(layout)
            .map_err(|e| AllocFailure::new(AllocOp::Alloc, layout.size(), e).into()),
    }
}

impl<T: Copy> PhiVec<T> {
    /// Creates an empty vector on the global heap.
    ///
    /// Allocates a zeroed header-only block; `len == capacity == 0`.
    pub fn new() -> Self {
        Self::new_in(Heap)
    }

    /// Creates an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Heap)
    }

    /// Creates a vector holding a copy of `data`, with `capacity == len`.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_slice_in(data, Heap)
    }
}

impl<T: Zeroable> PhiVec<T> {
    /// Creates a vector of `len` copies of `value`, with `capacity == len`.
    ///
    /// A zero `value` is served by a single zero-initialized allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phivec::PhiVec;
    ///
    /// let zeros = PhiVec::filled(0u64, 4);
    /// assert_eq!(zeros, [0, 0, 0, 0]);
    ///
    /// let sevens = PhiVec::filled(7u8, 3);
    /// assert_eq!(sevens, [7, 7, 7]);
    /// assert_eq!(sevens.capacity(), 3);
    /// ```
    pub fn filled(value: T, len: usize) -> Self {
        Self::filled_in(value, len, Heap)
    }
}

impl<T: Copy, A: RawAlloc> PhiVec<T, A> {
    /// Bytes between the start of the allocation and element 0.
    pub const HEADER_OFFSET: usize = header::offset_of::<T>();

    /// Allocates a block for `cap` elements and writes the header.
    ///
    /// The first `len` elements are left for the caller to initialize
    /// before anything reads them.
    fn allocate_in(
        cap: usize,
        len: usize,
        zeroed: bool,
        alloc: A,
        on_failure: OnFailure,
    ) -> Result<Self, PhiVecError> {
        debug_assert!(len <= cap);

        let layout = header::layout_for::<T>(cap)?;
        let base = allocate(&alloc, layout, zeroed, on_failure)?;

        // SAFETY: base is a fresh block laid out for `cap` elements.
        let handle = unsafe { header::handle_from_base::<T>(base) };
        // SAFETY: the header slot is in bounds and aligned.
        unsafe { header::header_of(handle).write(Header { len, cap }) };

        Ok(Self {
            handle,
            alloc,
            _marker: PhantomData,
        })
    }

    fn from_slice_with(data: &[T], alloc: A, on_failure: OnFailure) -> Result<Self, PhiVecError> {
        let vec = Self::allocate_in(data.len(), data.len(), false, alloc, on_failure)?;

        // SAFETY: the new block has room for data.len() elements and cannot
        // overlap a slice that was live before it was allocated.
        unsafe { ptr::copy_nonoverlapping(data.as_ptr(), vec.handle.as_ptr(), data.len()) };

        Ok(vec)
    }

    /// Creates an empty vector using `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self::allocate_in(0, 0, true, alloc, OnFailure::Abort).unwrap_or_else(|e| e.raise())
    }

    /// Creates an empty vector using `alloc`, reporting allocation failure.
    pub fn try_new_in(alloc: A) -> Result<Self, PhiVecError> {
        Self::allocate_in(0, 0, true, alloc, OnFailure::Report)
    }

    /// Creates an empty vector with room for `capacity` elements using `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::allocate_in(capacity, 0, false, alloc, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`with_capacity_in`](Self::with_capacity_in).
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, PhiVecError> {
        Self::allocate_in(capacity, 0, false, alloc, OnFailure::Report)
    }

    /// Creates a vector holding a copy of `data` using `alloc`.
    pub fn from_slice_in(data: &[T], alloc: A) -> Self {
        Self::from_slice_with(data, alloc, OnFailure::Abort).unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`from_slice_in`](Self::from_slice_in).
    pub fn try_from_slice_in(data: &[T], alloc: A) -> Result<Self, PhiVecError> {
        Self::from_slice_with(data, alloc, OnFailure::Report)
    }

    /// Copies this vector into a new one backed by `alloc`.
    ///
    /// The copy's capacity equals its length.
    pub fn clone_in<B: RawAlloc>(&self, alloc: B) -> PhiVec<T, B> {
        PhiVec::from_slice_in(self.as_slice(), alloc)
    }

    /// Fallible [`Clone::clone`].
    pub fn try_clone(&self) -> Result<Self, PhiVecError>
    where
        A: Clone,
    {
        Self::try_from_slice_in(self.as_slice(), self.alloc.clone())
    }

    #[inline(always)]
    fn header(&self) -> Header {
        // SAFETY: handle always points into a live block.
        let header = unsafe { header::header_of(self.handle).read() };
        debug_assert!(header.len <= header.cap);

        header
    }

    #[inline(always)]
    pub(crate) fn set_len(&mut self, len: usize) {
        // SAFETY: handle always points into a live block and we hold &mut.
        unsafe { header::header_of(self.handle).as_mut().len = len };
    }

    /// Pointer to element `index` (may be one past the end).
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: forwarded from the caller.
        unsafe { self.handle.add(index).as_ptr() }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.header().len
    }

    /// Number of elements the current allocation can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.header().cap
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, in every build profile.
    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        self.try_at(index).unwrap_or_else(|e| e.raise())
    }

    /// Returns a copy of the element at `index`, or `OutOfBounds`.
    pub fn try_at(&self, index: usize) -> Result<T, PhiVecError> {
        let len = self.len();

        if index >= len {
            return Err(PhiVecError::OutOfBounds { index, len });
        }

        // SAFETY: index < len, and the first len slots are initialized.
        Ok(unsafe { self.slot(index).read() })
    }

    /// Elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first len slots are initialized and aligned.
        unsafe { slice::from_raw_parts(self.handle.as_ptr(), self.len()) }
    }

    /// Elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and we hold &mut.
        unsafe { slice::from_raw_parts_mut(self.handle.as_ptr(), self.len()) }
    }

    /// Address of element 0.
    ///
    /// Changes whenever the buffer is reallocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.handle.as_ptr()
    }

    /// Mutable address of element 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.handle.as_ptr()
    }

    /// The backend this vector allocates from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Sets `len` to 0. Capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Releases the vector and its allocation.
    ///
    /// Equivalent to dropping it.
    pub fn destroy(self) {
        drop(self)
    }

    /// Reallocates to exactly `new_cap` elements.
    pub(crate) fn set_capacity(
        &mut self,
        new_cap: usize,
        on_failure: OnFailure,
    ) -> Result<(), PhiVecError> {
        let Header { len, cap } = self.header();
        debug_assert!(new_cap >= len);

        if new_cap == cap {
            return Ok(());
        }

        let old_layout = header::layout_for::<T>(cap)?;
        let new_layout = header::layout_for::<T>(new_cap)?;

        // SAFETY: handle is live; the block was allocated with old_layout,
        // and new_layout.size() is valid for the same alignment.
        let new_base = unsafe {
            let base = header::base_from_handle(self.handle);

            match on_failure {
                OnFailure::Abort => self.alloc.realloc(base, old_layout, new_layout.size()),
                OnFailure::Report => self
                    .alloc
                    .try_realloc(base, old_layout, new_layout.size())
                    .map_err(|e| AllocFailure::new(AllocOp::Realloc, new_layout.size(), e))?,
            }
        };

        // SAFETY: realloc kept the header and the first len elements.
        unsafe {
            self.handle = header::handle_from_base(new_base);
            header::header_of(self.handle).as_mut().cap = new_cap;
        }

        Ok(())
    }

    /// Makes room for `delta` more elements, growing by φ if needed.
    pub(crate) fn grow_for(&mut self, delta: usize, on_failure: OnFailure) -> Result<(), PhiVecError> {
        let Header { len, cap } = self.header();

        match policy::needs_grow(len, cap, delta) {
            None => Err(PhiVecError::CapacityOverflow),
            Some(false) => Ok(()),
            Some(true) => {
                let new_cap = policy::grown_capacity(len + delta)
                    .ok_or(PhiVecError::CapacityOverflow)?;

                self.set_capacity(new_cap, on_failure)
            }
        }
    }

    /// Shrinks to fit when the load factor dropped below `1/φ`.
    ///
    /// A refused shrink leaves the capacity unchanged.
    pub(crate) fn shrink_check(&mut self, on_failure: OnFailure) {
        let Header { len, cap } = self.header();

        if policy::needs_shrink(len, cap) {
            let _ = self.set_capacity(len, on_failure);
        }
    }

    /// Sets the capacity to exactly `max(capacity, len)`, growing or
    /// shrinking as needed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phivec::PhiVec;
    ///
    /// let mut vec = PhiVec::from_slice(&[1u8, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(1);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        let target = capacity.max(self.len());
        self.set_capacity(target, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), PhiVecError> {
        let target = capacity.max(self.len());
        self.set_capacity(target, OnFailure::Report)
    }

    /// Sets the capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        let len = self.len();
        self.set_capacity(len, OnFailure::Abort)
            .unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<(), PhiVecError> {
        let len = self.len();
        self.set_capacity(len, OnFailure::Report)
    }
}

impl<T: Zeroable, A: RawAlloc> PhiVec<T, A> {
    fn filled_with(value: T, len: usize, alloc: A, on_failure: OnFailure) -> Result<Self, PhiVecError> {
        if value.is_zero() {
            return Self::allocate_in(len, len, true, alloc, on_failure);
        }

        let vec = Self::allocate_in(len, len, false, alloc, on_failure)?;

        for i in 0..len {
            // SAFETY: i < len == capacity.
            unsafe { vec.slot(i).write(value) };
        }

        Ok(vec)
    }

    /// Creates a vector of `len` copies of `value` using `alloc`.
    pub fn filled_in(value: T, len: usize, alloc: A) -> Self {
        Self::filled_with(value, len, alloc, OnFailure::Abort).unwrap_or_else(|e| e.raise())
    }

    /// Fallible [`filled_in`](Self::filled_in).
    pub fn try_filled_in(value: T, len: usize, alloc: A) -> Result<Self, PhiVecError> {
        Self::filled_with(value, len, alloc, OnFailure::Report)
    }
}

impl<T: Copy, A: RawAlloc> Drop for PhiVec<T, A> {
    fn drop(&mut self) {
        let cap = self.capacity();

        // The layout was valid when the block was created.
        if let Ok(layout) = header::layout_for::<T>(cap) {
            // SAFETY: the block starts at the header and was allocated by
            // this backend with this layout.
            unsafe {
                self.alloc
                    .dealloc(header::base_from_handle(self.handle), layout)
            };
        }
    }
}

impl<T: Copy, A: RawAlloc + Clone> Clone for PhiVec<T, A> {
    /// Copies the elements into a new allocation with `capacity == len`.
    fn clone(&self) -> Self {
        Self::from_slice_in(self.as_slice(), self.alloc.clone())
    }
}

impl<T: Copy, A: RawAlloc + Default> Default for PhiVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Copy + fmt::Debug, A: RawAlloc> fmt::Debug for PhiVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhiVec")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Copy, A: RawAlloc> Deref for PhiVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: Copy, A: RawAlloc> DerefMut for PhiVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T: Copy, A: RawAlloc> IntoIterator for &'a PhiVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T: Copy, A: RawAlloc> IntoIterator for &'a mut PhiVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy, A: RawAlloc> Extend<T> for PhiVec<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, A: RawAlloc> Extend<&'a T> for PhiVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Copy, A: RawAlloc + Default> FromIterator<T> for PhiVec<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::default();
        vec.extend(iter);

        vec
    }
}

impl<T: Copy, A: RawAlloc + Default> From<&[T]> for PhiVec<T, A> {
    fn from(data: &[T]) -> Self {
        Self::from_slice_in(data, A::default())
    }
}

impl<T, A, B> PartialEq<PhiVec<T, B>> for PhiVec<T, A>
where
    T: Copy + PartialEq,
    A: RawAlloc,
    B: RawAlloc,
{
    fn eq(&self, other: &PhiVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, A: RawAlloc> Eq for PhiVec<T, A> {}

impl<T: Copy + PartialEq, A: RawAlloc> PartialEq<[T]> for PhiVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Copy + PartialEq, A: RawAlloc> PartialEq<&[T]> for PhiVec<T, A> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Copy + PartialEq, A: RawAlloc, const N: usize> PartialEq<[T; N]> for PhiVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
