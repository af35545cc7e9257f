// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::{AllocBehaviour, AllocStats, Counting, Faulty, Heap, RawAlloc};

fn layout(size: usize) -> Layout {
    Layout::from_size_align(size, 8).expect("Failed to Layout::from_size_align(..)")
}

#[test]
fn test_new_starts_at_zero() {
    let counting = Counting::new(Heap);
    assert_eq!(counting.stats(), AllocStats::default());
}

#[test]
fn test_counts_each_operation() {
    let counting = Counting::new(Heap);

    let a = counting.alloc_zeroed(layout(16));
    let b = counting.alloc(layout(32));
    // SAFETY: a was allocated by `counting` with this layout.
    let a = unsafe { counting.realloc(a, layout(16), 64) };

    let stats = counting.stats();
    assert_eq!(stats.zero_allocs, 1);
    assert_eq!(stats.allocs, 1);
    assert_eq!(stats.reallocs, 1);
    assert_eq!(stats.deallocs, 0);
    assert_eq!(stats.live_bytes, 64 + 32);
    assert_eq!(stats.live_blocks, 2);

    // SAFETY: both blocks were allocated by `counting` with these layouts.
    unsafe {
        counting.dealloc(a, layout(64));
        counting.dealloc(b, layout(32));
    }

    let stats = counting.stats();
    assert_eq!(stats.deallocs, 2);
    assert_eq!(stats.live_bytes, 0);
    assert_eq!(stats.live_blocks, 0);
    assert_eq!(stats.peak_bytes, 96);
}

#[test]
fn test_peak_tracks_high_water_mark_across_shrink() {
    let counting = Counting::new(Heap);

    let ptr = counting.alloc(layout(1024));
    // SAFETY: ptr was allocated by `counting` with this layout.
    let ptr = unsafe { counting.realloc(ptr, layout(1024), 8) };

    assert_eq!(counting.stats().live_bytes, 8);
    assert_eq!(counting.stats().peak_bytes, 1024);

    // SAFETY: realloc above left a block of 8 bytes.
    unsafe { counting.dealloc(ptr, layout(8)) };
}

#[test]
fn test_reset_keeps_live_bytes() {
    let counting = Counting::new(Heap);
    let ptr = counting.alloc(layout(40));

    counting.reset();

    let stats = counting.stats();
    assert_eq!(stats.allocs, 0);
    assert_eq!(stats.live_blocks, 1);
    assert_eq!(stats.live_bytes, 40);
    assert_eq!(stats.peak_bytes, 40);

    // SAFETY: ptr was allocated by `counting` with this layout.
    unsafe { counting.dealloc(ptr, layout(40)) };

    let stats = counting.stats();
    assert_eq!(stats.deallocs, 1);
    assert_eq!(stats.live_blocks, 0);
    assert_eq!(stats.live_bytes, 0);
}

#[test]
fn test_live_blocks_survive_reset_between_allocations() {
    let counting = Counting::new(Heap);
    let a = counting.alloc_zeroed(layout(8));

    counting.reset();
    let b = counting.alloc(layout(16));
    // SAFETY: b was allocated by `counting` with this layout.
    let b = unsafe { counting.realloc(b, layout(16), 48) };

    let stats = counting.stats();
    assert_eq!(stats.zero_allocs, 0);
    assert_eq!(stats.allocs, 1);
    assert_eq!(stats.live_blocks, 2);
    assert_eq!(stats.live_bytes, 8 + 48);

    // SAFETY: both blocks were allocated by `counting` with these layouts.
    unsafe {
        counting.dealloc(a, layout(8));
        counting.dealloc(b, layout(48));
    }

    assert_eq!(counting.stats().live_blocks, 0);
}

#[test]
fn test_counts_failures_from_inner_backend() {
    let counting = Counting::new(Faulty::new(Heap));
    counting.inner().change_behaviour(AllocBehaviour::FailAtAlloc);

    assert!(counting.try_alloc(layout(16)).is_err());

    let stats = counting.stats();
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.allocs, 0);
    assert_eq!(stats.live_bytes, 0);
}

#[test]
fn test_shared_by_reference() {
    let counting = Counting::new(Heap);
    let by_ref = &counting;

    let ptr = by_ref.alloc(layout(24));
    // SAFETY: ptr was allocated through the same backend with this layout.
    unsafe { by_ref.dealloc(ptr, layout(24)) };

    assert_eq!(counting.stats().allocs, 1);
    assert_eq!(counting.stats().deallocs, 1);
}
