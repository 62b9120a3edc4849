// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: Growth policy walkthrough
//
// Demonstrates the two capacity-management policies side by side:
// - ExactFit: front and back mutations with per-call reallocation
// - DoublingAmortized: capacity doubling on push, no shrink on pop

use growvec::{GrowVec, GrowVecError, GrowthPolicy};

fn exact_fit_demo() -> Result<(), GrowVecError> {
    println!("== ExactFit ==");

    let mut arr = GrowVec::with_policy(GrowthPolicy::ExactFit, 0)?;

    arr.unshift_front(1)?;
    arr.push_back(2)?;
    arr.push_back(3)?;
    arr.push_back(4)?;

    let shifted = arr.shift_front()?;
    let popped = arr.pop_back()?;

    println!("Removed {shifted} from the front and {popped} from the back");
    println!(
        "{arr} (length: {}, capacity: {})",
        arr.len(),
        arr.capacity()
    );

    Ok(())
}

fn doubling_demo() -> Result<(), GrowVecError> {
    println!("== DoublingAmortized ==");

    // Start small to demonstrate growth
    let mut arr = GrowVec::with_policy(GrowthPolicy::DoublingAmortized, 2)?;

    println!(
        "Initial: {arr} (length: {}, capacity: {})",
        arr.len(),
        arr.capacity()
    );

    for i in 1..=8 {
        arr.push_back(i * 10)?;
        println!(
            "After push {i}: {arr} (length: {}, capacity: {})",
            arr.len(),
            arr.capacity()
        );
    }

    // Capacity stays put while popping
    for _ in 0..3 {
        let popped = arr.pop_back()?;
        println!(
            "Popped {popped}: {arr} (length: {}, capacity: {})",
            arr.len(),
            arr.capacity()
        );
    }

    Ok(())
}

fn main() -> Result<(), GrowVecError> {
    exact_fit_demo()?;
    doubling_demo()?;

    Ok(())
}
