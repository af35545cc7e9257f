// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth and shrink decisions.
//!
//! Growth multiplies the required length by the golden ratio φ and rounds
//! up. Shrinking to fit happens once the load factor `len / cap` drops
//! below `1/φ`. Both are computed in 64.64 fixed point so that no `usize`
//! input loses precision to floating point.

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// `1/φ`, the load factor under which a vector shrinks to fit.
pub const SHRINK_LOAD_FACTOR: f64 = PHI - 1.0;

/// `ceil((φ − 1) · 2^64)`. Rounded up so products never undershoot.
const PHI_FRACTION: u128 = 0x9E37_79B9_7F4A_7C16;

const ONE: u128 = 1 << 64;

/// `ceil(n · φ)`, or `None` if it does not fit in `usize`.
///
/// Never returns less than `n`, and returns more than `n` for every `n > 0`.
///
/// # Example
///
/// ```rust
/// use phivec::policy::grown_capacity;
///
/// assert_eq!(grown_capacity(1), Some(2));
/// assert_eq!(grown_capacity(3), Some(5));
/// assert_eq!(grown_capacity(100), Some(162));
/// ```
pub fn grown_capacity(n: usize) -> Option<usize> {
    let extra = (n as u128 * PHI_FRACTION + (ONE - 1)) >> 64;
    let extra = usize::try_from(extra).ok()?;

    n.checked_add(extra)
}

/// Whether adding `delta` elements to `len` exceeds `cap`.
///
/// `None` when `len + delta` overflows.
pub fn needs_grow(len: usize, cap: usize, delta: usize) -> Option<bool> {
    len.checked_add(delta).map(|required| required > cap)
}

/// Whether `len / cap < 1/φ`, i.e. the vector should shrink to fit.
///
/// `len · φ` is irrational for `len > 0`, so `len · φ < cap` is the same
/// as `ceil(len · φ) <= cap`. A vector already at `len == cap` never
/// shrinks.
///
/// Right after a grow the load factor is just above `1/φ`, so a single
/// removal can shrink to fit and the next insertion grows again. Around
/// length 5, alternating push and pop cycles the capacity 10, 5, 10, 5.
pub fn needs_shrink(len: usize, cap: usize) -> bool {
    if len >= cap {
        return false;
    }

    match grown_capacity(len) {
        Some(threshold) => threshold <= cap,
        None => false,
    }
}
