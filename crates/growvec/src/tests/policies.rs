// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{GrowVec, GrowthPolicy};

// =============================================================================
// DoublingAmortized
// =============================================================================

#[test]
fn test_doubling_growth_sequence() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::DoublingAmortized, 2).unwrap();

    let mut capacities = Vec::new();
    for i in 1..=8 {
        vec.push_back(i * 10).unwrap();
        capacities.push(vec.capacity());
    }

    // Doubling only when a push fills the buffer: 2 -> 4 -> 8 -> 16
    assert_eq!(capacities, [2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(vec.len(), 8);
    assert_eq!(vec.capacity(), 16);
}

#[test]
fn test_doubling_end_to_end_scenario() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::DoublingAmortized, 2).unwrap();

    for i in 1..=8 {
        vec.push_back(i * 10).unwrap();
    }

    for _ in 0..3 {
        vec.pop_back().unwrap();
    }

    assert_eq!(vec.as_slice(), &[10, 20, 30, 40, 50]);
    assert_eq!(vec.capacity(), 16);
}

#[test]
fn test_doubling_never_shrinks_on_pop() {
    let mut vec = GrowVec::with_capacity(0).unwrap();

    for i in 0..5 {
        vec.push_back(i).unwrap();
    }
    let capacity_after_pushes = vec.capacity();

    for _ in 0..3 {
        vec.pop_back().unwrap();
    }

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), capacity_after_pushes);
}

#[test]
fn test_doubling_from_empty_grows_one_two_four() {
    let mut vec = GrowVec::new();

    vec.push_back(1).unwrap();
    assert_eq!(vec.capacity(), 1);

    vec.push_back(2).unwrap();
    assert_eq!(vec.capacity(), 2);

    vec.push_back(3).unwrap();
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_doubling_reallocation_count_is_logarithmic() {
    let mut vec = GrowVec::new();

    let mut reallocations = 0;
    let mut last_capacity = vec.capacity();
    for i in 0..1024 {
        vec.push_back(i).unwrap();
        if vec.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = vec.capacity();
        }
    }

    // Capacity doubles each time, so 1024 pushes touch the allocator
    // O(log n) times rather than once per push
    assert!(reallocations <= 12, "saw {reallocations} reallocations");
    assert_eq!(vec.len(), 1024);
}

// =============================================================================
// ExactFit
// =============================================================================

#[test]
fn test_exact_fit_capacity_tracks_length() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::ExactFit, 0).unwrap();

    for i in 0..3 {
        vec.push_back(i).unwrap();
        assert_eq!(vec.capacity(), vec.len());
    }

    vec.pop_back().unwrap();

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_exact_fit_pop_to_empty_releases_allocation() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::ExactFit, 0).unwrap();

    vec.push_back(1).unwrap();
    vec.pop_back().unwrap();

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_exact_fit_reallocates_on_every_push() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::ExactFit, 0).unwrap();

    let mut reallocations = 0;
    let mut last_capacity = vec.capacity();
    for i in 0..100 {
        vec.push_back(i).unwrap();
        if vec.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = vec.capacity();
        }
    }

    assert_eq!(reallocations, 100);
}

#[test]
fn test_exact_fit_preserves_contents() {
    let mut vec = GrowVec::with_policy(GrowthPolicy::ExactFit, 0).unwrap();

    for i in 0..50 {
        vec.push_back(i).unwrap();
    }

    let expected: Vec<i32> = (0..50).collect();
    assert_eq!(vec.as_slice(), expected.as_slice());
}
