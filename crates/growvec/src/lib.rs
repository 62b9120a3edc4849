// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit capacity-management policies.
//!
//! `GrowVec<T>` owns a single contiguous allocation and exposes the classic
//! dynamic-array operations: amortized O(1) append and O(1) removal at the
//! tail, O(n) insertion and removal at the front, and checked indexed
//! access. Unlike `Vec`, the reallocation policy is part of the API and is
//! chosen at construction time.
//!
//! # Growth Policies
//!
//! ## DoublingAmortized
//!
//! The default. Capacity doubles whenever a push fills the buffer and never
//! shrinks on pop:
//! - Pushing N elements performs O(log N) reallocations
//! - `pop_back` is exactly O(1), it never touches the allocator
//! - Up to 2x memory headroom is kept as spare capacity
//!
//! ## ExactFit
//!
//! Reallocates to precisely the required size on every mutation:
//! - Capacity always equals length after a push or pop
//! - Pushing N elements costs O(N²) in total
//! - No spare capacity is ever held
//!
//! Front operations (`unshift_front`, `shift_front`) resize to exact fit
//! under either policy; they already pay O(n) to move elements, so the
//! reallocation does not change their complexity.
//!
//! # Ownership
//!
//! The vector is the sole owner of its buffer. Reallocation relocates the
//! buffer wholesale, which is why all mutation goes through `&mut self` and
//! why concurrent access requires an external lock. Release happens exactly
//! once, in `Drop`; use-after-free and double-free are unrepresentable.
//!
//! # Example
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError, GrowthPolicy};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::with_policy(GrowthPolicy::DoublingAmortized, 2)?;
//!
//!     for value in [10, 20, 30, 40, 50] {
//!         vec.push_back(value)?;
//!     }
//!
//!     assert_eq!(vec.len(), 5);
//!     assert_eq!(vec.to_string(), "[10, 20, 30, 40, 50]");
//!
//!     // Popping never shrinks under the doubling policy
//!     let capacity = vec.capacity();
//!     vec.pop_back()?;
//!     assert_eq!(vec.capacity(), capacity);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Front Operations
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError, GrowthPolicy};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::with_policy(GrowthPolicy::ExactFit, 0)?;
//!
//!     vec.unshift_front(1)?;
//!     vec.push_back(2)?;
//!     vec.push_back(3)?;
//!     vec.push_back(4)?;
//!
//!     assert_eq!(vec.shift_front()?, 1);
//!     assert_eq!(vec.pop_back()?, 4);
//!     assert_eq!(vec.to_string(), "[2, 3]");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod grow_vec;
mod raw_buf;

#[cfg(test)]
mod tests;

pub use error::GrowVecError;
pub use grow_vec::{GrowVec, GrowthPolicy};
