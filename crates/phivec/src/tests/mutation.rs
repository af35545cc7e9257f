// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use phivec_test_utils::{apply_permutation, index_permutations};

use crate::{PhiVec, PhiVecError};

fn abcd() -> PhiVec<char> {
    PhiVec::from_slice(&['a', 'b', 'c', 'd'])
}

// =============================================================================
// push(), pop()
// =============================================================================

#[test]
fn test_push_pop_order() {
    let mut vec = PhiVec::new();

    for i in 0..100u16 {
        vec.push(i);
    }

    for i in (0..100u16).rev() {
        assert_eq!(vec.pop(), Some(i));
    }

    assert_eq!(vec.pop(), None);
    assert!(vec.is_empty());
}

#[test]
fn test_try_pop_empty() {
    let mut vec = PhiVec::<u8>::new();

    assert_eq!(vec.try_pop(), Err(PhiVecError::Empty));
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_try_push() {
    let mut vec = PhiVec::new();

    vec.try_push(7i8).expect("Failed to try_push()");
    assert_eq!(vec, [7]);
}

// =============================================================================
// insert()
// =============================================================================

#[test]
fn test_insert_in_the_middle() {
    let mut vec = PhiVec::from_slice(&['a', 'b', 'c']);

    vec.insert(1, 'x');

    assert_eq!(vec, ['a', 'x', 'b', 'c']);
    assert_eq!(vec.capacity(), 7);
}

#[test]
fn test_insert_at_front_and_end() {
    let mut vec = PhiVec::from_slice(&[2u8, 3]);

    vec.insert(0, 1);
    vec.insert(3, 4);

    assert_eq!(vec, [1, 2, 3, 4]);
}

#[test]
fn test_try_insert_past_end() {
    let mut vec = PhiVec::from_slice(&[1u8, 2, 3]);

    assert_eq!(
        vec.try_insert(4, 9),
        Err(PhiVecError::InvalidPosition { pos: 4, len: 3 })
    );
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
}

#[test]
#[should_panic(expected = "insertion position 4 exceeds length 3")]
fn test_insert_past_end_panics() {
    let mut vec = PhiVec::from_slice(&[1u8, 2, 3]);
    vec.insert(4, 9);
}

#[test]
fn test_insert_all_orders() {
    const N: usize = 6;

    let values: Vec<usize> = (0..N).collect();

    index_permutations(N, |order| {
        let arrival = apply_permutation(&values, order);
        let mut vec = PhiVec::new();

        for value in arrival {
            let pos = vec.iter().filter(|v| **v < value).count();
            vec.insert(pos, value);
            assert!(vec.len() <= vec.capacity());
        }

        assert_eq!(vec, values.as_slice(), "failed for order {order:?}");
    });
}

// =============================================================================
// insert_slice(), insert_vec(), extend_from_slice()
// =============================================================================

#[test]
fn test_insert_slice_in_the_middle() {
    let mut vec = PhiVec::from_slice(&[1u32, 5]);

    vec.insert_slice(1, &[2, 3, 4]);

    assert_eq!(vec, [1, 2, 3, 4, 5]);
    assert_eq!(vec.capacity(), 9);
}

#[test]
fn test_insert_empty_slice_keeps_buffer() {
    let mut vec = PhiVec::from_slice(&[1u32, 2]);
    let ptr = vec.as_ptr();

    vec.insert_slice(1, &[]);

    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.as_ptr(), ptr);
}

#[test]
fn test_insert_vec_from_itself_via_clone() {
    let mut vec = PhiVec::from_slice(&[1u8, 2]);
    let copy = vec.clone();

    vec.insert_vec(1, &copy);

    assert_eq!(vec, [1, 1, 2, 2]);
}

#[test]
fn test_try_insert_vec_past_end() {
    let mut vec = PhiVec::from_slice(&[1u8]);
    let other = PhiVec::from_slice(&[2u8]);

    assert_eq!(
        vec.try_insert_vec(2, &other),
        Err(PhiVecError::InvalidPosition { pos: 2, len: 1 })
    );
}

#[test]
fn test_extend_from_slice_and_extend() {
    let mut vec = PhiVec::new();

    vec.extend_from_slice(&[1u64, 2]);
    vec.try_extend_from_slice(&[3])
        .expect("Failed to try_extend_from_slice()");
    vec.extend([4, 5]);
    vec.extend(&[6, 7]);

    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
}

// =============================================================================
// remove()
// =============================================================================

#[test]
fn test_remove_returns_element() {
    let mut vec = abcd();

    assert_eq!(vec.remove(1), 'b');
    assert_eq!(vec, ['a', 'c', 'd']);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_try_remove_out_of_bounds() {
    let mut vec = abcd();

    assert_eq!(
        vec.try_remove(4),
        Err(PhiVecError::OutOfBounds { index: 4, len: 4 })
    );
    assert_eq!(vec, ['a', 'b', 'c', 'd']);
}

#[test]
#[should_panic(expected = "index 0 out of bounds for length 0")]
fn test_remove_from_empty_panics() {
    let mut vec = PhiVec::<u8>::new();
    vec.remove(0);
}

#[test]
fn test_remove_all_orders() {
    const N: usize = 6;

    let values: Vec<usize> = (0..N).collect();

    index_permutations(N, |order| {
        let mut vec = PhiVec::from_slice(&values);

        for (removed, &value) in order.iter().enumerate() {
            let pos = vec
                .iter()
                .position(|v| *v == value)
                .expect("Failed to find value");

            assert_eq!(vec.remove(pos), value);
            assert_eq!(vec.len(), N - removed - 1);
            assert!(vec.windows(2).all(|w| w[0] < w[1]));
        }

        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 0);
    });
}

// =============================================================================
// erase_range()
// =============================================================================

#[test]
fn test_erase_range_middle() {
    let mut vec = abcd();

    vec.erase_range(1, 3);

    assert_eq!(vec, ['a', 'd']);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_erase_range_whole() {
    let mut vec = abcd();

    vec.erase_range(0, 4);

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_erase_empty_range_is_noop() {
    let mut vec = PhiVec::with_capacity(100);
    vec.push(1u8);
    let ptr = vec.as_ptr();

    vec.erase_range(1, 1);

    assert_eq!(vec, [1]);
    assert_eq!(vec.capacity(), 100);
    assert_eq!(vec.as_ptr(), ptr);
}

#[test]
fn test_try_erase_range_invalid() {
    let mut vec = abcd();

    assert_eq!(
        vec.try_erase_range(3, 1),
        Err(PhiVecError::InvalidRange {
            start: 3,
            end: 1,
            len: 4
        })
    );
    assert_eq!(
        vec.try_erase_range(2, 5),
        Err(PhiVecError::InvalidRange {
            start: 2,
            end: 5,
            len: 4
        })
    );
    assert_eq!(vec, ['a', 'b', 'c', 'd']);
}

#[test]
#[should_panic(expected = "invalid range 2..5 for length 4")]
fn test_erase_range_past_end_panics() {
    let mut vec = abcd();
    vec.erase_range(2, 5);
}

#[test]
fn test_erase_every_range() {
    const N: usize = 8;

    let values: Vec<u32> = (0..N as u32).collect();

    for start in 0..=N {
        for end in start..=N {
            let mut vec = PhiVec::from_slice(&values);
            let mut expected = values.clone();

            vec.erase_range(start, end);
            expected.drain(start..end);

            assert_eq!(vec, expected.as_slice(), "failed for {start}..{end}");
            assert!(vec.len() <= vec.capacity());
        }
    }
}

// =============================================================================
// clear()
// =============================================================================

#[test]
fn test_clear_then_reuse() {
    let mut vec = abcd();
    let ptr = vec.as_ptr();

    vec.clear();
    vec.push('z');

    assert_eq!(vec, ['z']);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.as_ptr(), ptr);
}
