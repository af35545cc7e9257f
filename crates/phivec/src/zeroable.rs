// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Types whose all-zero bit pattern is a valid value.

/// Element types that can be produced by zero-initialized memory.
///
/// `PhiVec::filled` uses this to take the zero-allocation fast path when
/// the fill value is zero.
///
/// # Safety
///
/// The all-zero bit pattern must be a valid `Self`, and `is_zero` must
/// return `true` only for a value whose bytes are all zero.
///
/// # Example
///
/// ```rust
/// use phivec::Zeroable;
///
/// #[derive(Clone, Copy)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// // SAFETY: two i32 fields, no padding, zero is a valid point.
/// unsafe impl Zeroable for Point {
///     fn is_zero(&self) -> bool {
///         self.x == 0 && self.y == 0
///     }
/// }
///
/// assert!(Point { x: 0, y: 0 }.is_zero());
/// ```
pub unsafe trait Zeroable: Copy {
    /// Returns `true` if every byte of `self` is zero.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zeroable_int {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: zero is a valid integer and the only all-zero value.
            unsafe impl Zeroable for $ty {
                #[inline(always)]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

macro_rules! impl_zeroable_float {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: +0.0 is all-zero bits; -0.0 is not and compares false.
            unsafe impl Zeroable for $ty {
                #[inline(always)]
                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )*
    };
}

impl_zeroable_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_zeroable_float!(f32, f64);

// SAFETY: `false` is the zero byte.
unsafe impl Zeroable for bool {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        !*self
    }
}

// SAFETY: U+0000 is the zero scalar.
unsafe impl Zeroable for char {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

// SAFETY: zero-sized.
unsafe impl Zeroable for () {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        true
    }
}

// SAFETY: an array of zeroable elements has no padding between elements.
unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(Zeroable::is_zero)
    }
}
