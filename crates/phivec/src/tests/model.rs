// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use phivec_alloc::{Counting, Heap, RawAlloc};
use phivec_test_utils::{VecOp, vec_ops_strategy};

use crate::PhiVec;
use crate::policy::{grown_capacity, needs_shrink};

fn apply<A: RawAlloc>(vec: &mut PhiVec<u32, A>, op: &VecOp<u32>) {
    match op {
        VecOp::Push(value) => vec.push(*value),
        VecOp::Pop => {
            vec.pop();
        }
        VecOp::Insert { pos, value } => {
            let pos = VecOp::<u32>::insert_pos(*pos, vec.len());
            vec.insert(pos, *value);
        }
        VecOp::InsertSlice { pos, values } => {
            let pos = VecOp::<u32>::insert_pos(*pos, vec.len());
            vec.insert_slice(pos, values);
        }
        VecOp::Remove { pos } => {
            if let Some(pos) = VecOp::<u32>::remove_pos(*pos, vec.len()) {
                vec.remove(pos);
            }
        }
        VecOp::EraseRange { a, b } => {
            let (start, end) = VecOp::<u32>::erase_bounds(*a, *b, vec.len());
            vec.erase_range(start, end);
        }
        VecOp::Clear => vec.clear(),
        VecOp::Reserve(capacity) => vec.reserve(*capacity),
        VecOp::ShrinkToFit => vec.shrink_to_fit(),
    }
}

fn removes(op: &VecOp<u32>) -> bool {
    matches!(
        op,
        VecOp::Pop | VecOp::Remove { .. } | VecOp::EraseRange { .. }
    )
}

proptest! {
    #[test]
    fn prop_matches_std_vec(ops in vec_ops_strategy(200)) {
        let mut vec = PhiVec::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut vec, op);
            op.apply_to_model(&mut model);

            prop_assert_eq!(vec.as_slice(), model.as_slice(), "after {:?}", op);
            prop_assert!(vec.len() <= vec.capacity());
        }
    }

    #[test]
    fn prop_capacity_follows_policy(ops in vec_ops_strategy(200)) {
        let mut vec = PhiVec::new();

        for op in &ops {
            let len = vec.len();
            let cap = vec.capacity();

            apply(&mut vec, op);

            let new_len = vec.len();
            let new_cap = vec.capacity();

            match op {
                VecOp::Reserve(capacity) => prop_assert_eq!(new_cap, (*capacity).max(len)),
                VecOp::ShrinkToFit => prop_assert_eq!(new_cap, len),
                VecOp::Clear => prop_assert_eq!(new_cap, cap),
                _ if new_len > cap => {
                    prop_assert_eq!(Some(new_cap), grown_capacity(new_len));
                }
                _ if new_len > len => prop_assert_eq!(new_cap, cap),
                _ if removes(op) && new_len < len => {
                    if needs_shrink(new_len, cap) {
                        prop_assert_eq!(new_cap, new_len);
                    } else {
                        prop_assert_eq!(new_cap, cap);
                    }
                }
                _ => prop_assert_eq!(new_cap, cap),
            }
        }
    }

    #[test]
    fn prop_never_leaks(ops in vec_ops_strategy(100)) {
        let backend = Counting::new(Heap);

        {
            let mut vec = PhiVec::new_in(&backend);
            for op in &ops {
                apply(&mut vec, op);
            }
        }

        let stats = backend.stats();
        prop_assert_eq!(stats.live_bytes, 0);
        prop_assert_eq!(stats.live_blocks, 0);
    }
}
