// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Randomized operation sequences checked against `Vec<T>` as a model.

use proptest::prelude::*;

/// One structural mutation.
///
/// Positions are raw draws; they are reduced against the current length
/// when applied, so every generated sequence is valid for any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VecOp<T> {
    /// Append one element.
    Push(T),
    /// Remove the last element (no-op when empty).
    Pop,
    /// Insert one element.
    Insert {
        /// Raw position draw.
        pos: usize,
        /// Element to insert.
        value: T,
    },
    /// Insert a run of elements.
    InsertSlice {
        /// Raw position draw.
        pos: usize,
        /// Elements to insert.
        values: Vec<T>,
    },
    /// Remove one element (no-op when empty).
    Remove {
        /// Raw position draw.
        pos: usize,
    },
    /// Remove a range of elements.
    EraseRange {
        /// Raw draw for the first bound.
        a: usize,
        /// Raw draw for the second bound.
        b: usize,
    },
    /// Drop every element, keeping capacity.
    Clear,
    /// Request an exact capacity.
    Reserve(usize),
    /// Release unused capacity.
    ShrinkToFit,
}

impl<T> VecOp<T> {
    /// Insertion index for a vector of length `len` (`0..=len`).
    pub fn insert_pos(pos: usize, len: usize) -> usize {
        pos % (len + 1)
    }

    /// Removal index for a vector of length `len`, `None` when empty.
    pub fn remove_pos(pos: usize, len: usize) -> Option<usize> {
        (len > 0).then(|| pos % len)
    }

    /// Ordered range `start..end` within `0..=len`.
    pub fn erase_bounds(a: usize, b: usize, len: usize) -> (usize, usize) {
        let a = a % (len + 1);
        let b = b % (len + 1);
        (a.min(b), a.max(b))
    }
}

impl<T: Clone> VecOp<T> {
    /// Applies the operation to the reference model.
    pub fn apply_to_model(&self, model: &mut Vec<T>) {
        match self {
            Self::Push(value) => model.push(value.clone()),
            Self::Pop => {
                model.pop();
            }
            Self::Insert { pos, value } => {
                let pos = Self::insert_pos(*pos, model.len());
                model.insert(pos, value.clone());
            }
            Self::InsertSlice { pos, values } => {
                let pos = Self::insert_pos(*pos, model.len());
                model.splice(pos..pos, values.iter().cloned());
            }
            Self::Remove { pos } => {
                if let Some(pos) = Self::remove_pos(*pos, model.len()) {
                    model.remove(pos);
                }
            }
            Self::EraseRange { a, b } => {
                let (start, end) = Self::erase_bounds(*a, *b, model.len());
                model.drain(start..end);
            }
            Self::Clear => model.clear(),
            Self::Reserve(_) | Self::ShrinkToFit => {}
        }
    }
}

/// Strategy producing a single operation over `u32` elements.
pub fn vec_op_strategy() -> impl Strategy<Value = VecOp<u32>> {
    prop_oneof![
        6 => any::<u32>().prop_map(VecOp::Push),
        3 => Just(VecOp::Pop),
        3 => (any::<usize>(), any::<u32>()).prop_map(|(pos, value)| VecOp::Insert { pos, value }),
        2 => (any::<usize>(), prop::collection::vec(any::<u32>(), 0..16))
            .prop_map(|(pos, values)| VecOp::InsertSlice { pos, values }),
        3 => any::<usize>().prop_map(|pos| VecOp::Remove { pos }),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| VecOp::EraseRange { a, b }),
        1 => Just(VecOp::Clear),
        1 => (0usize..64).prop_map(VecOp::Reserve),
        1 => Just(VecOp::ShrinkToFit),
    ]
}

/// Strategy producing sequences of up to `max_len` operations.
pub fn vec_ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<VecOp<u32>>> {
    prop::collection::vec(vec_op_strategy(), 0..max_len)
}
