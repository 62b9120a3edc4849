// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growvec.
use thiserror::Error;

/// Errors that can occur when working with a [`GrowVec`](crate::GrowVec).
///
/// Every operation either fully succeeds or fails with one of these variants,
/// leaving the vector in its prior valid state. In particular, an allocation
/// failure during growth keeps the old buffer owned and intact.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowVecError {
    /// The allocator could not satisfy a create or grow request.
    #[error("allocation of {requested} element slots failed")]
    AllocationFailure {
        /// Number of element slots that were requested.
        requested: usize,
    },

    /// `pop_back` or `shift_front` was called on an empty vector.
    #[error("cannot remove from an empty array")]
    EmptyArray,

    /// `get` or `set` was called with an index outside the live range.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        length: usize,
    },
}
