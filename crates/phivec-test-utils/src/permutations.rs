// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutations for exhaustive insertion/erasure orders.

/// Heap's algorithm over `indices[..k]`.
fn heap_permute<F>(indices: &mut [usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k <= 1 {
        callback(indices);
        return;
    }

    heap_permute(indices, k - 1, callback);

    for i in 0..k - 1 {
        let j = if k % 2 == 0 { i } else { 0 };
        indices.swap(j, k - 1);
        heap_permute(indices, k - 1, callback);
    }
}

/// Calls `callback` once for every ordering of `0..len`.
///
/// # Example
/// ```
/// use phivec_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(4, |_order| count += 1);
/// assert_eq!(count, 24);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    heap_permute(&mut indices, len, &mut callback);
}

/// Returns a copy of `items` reordered so that position `i` holds
/// `items[order[i]]`.
///
/// # Example
/// ```
/// use phivec_test_utils::apply_permutation;
///
/// let reordered = apply_permutation(&['a', 'b', 'c'], &[2, 0, 1]);
/// assert_eq!(reordered, ['c', 'a', 'b']);
/// ```
pub fn apply_permutation<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), order.len(), "permutation length mismatch");

    order.iter().map(|&i| items[i].clone()).collect()
}
