// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::slice;

use crate::error::GrowVecError;
use crate::raw_buf::RawBuf;

/// Capacity-management policy for a [`GrowVec`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum GrowthPolicy {
    /// Reallocate to exactly the required size on every mutation.
    ///
    /// After any push or pop, capacity equals length. Pushing n elements
    /// costs O(n²) in total since every push copies the whole buffer.
    ExactFit,

    /// Double the capacity whenever a push fills the buffer; never shrink
    /// on pop.
    ///
    /// Pushing is O(1) amortized at the cost of up to 2x memory headroom.
    #[default]
    DoublingAmortized,
}

/// An owning, contiguous, resizable sequence of elements with an explicit
/// capacity-management policy.
///
/// The backing store is a single allocation of `capacity` slots of which the
/// first `len` hold live elements. All mutation goes through `&mut self`, so
/// a reallocation that relocates the buffer can never invalidate an
/// outstanding reference. Dropping the vector drops the live elements and
/// releases the allocation exactly once.
///
/// Zero-sized element types are rejected at compile time.
///
/// # Example
///
/// ```rust
/// use growvec::{GrowVec, GrowVecError};
///
/// fn example() -> Result<(), GrowVecError> {
///     let mut vec = GrowVec::with_capacity(2)?;
///
///     vec.push_back(1)?;
///     vec.push_back(2)?;
///     vec.push_back(3)?;
///
///     // Contents survive the reallocation triggered by the third push
///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
///     assert_eq!(vec.pop_back()?, 3);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
    policy: GrowthPolicy,
}

// Safety: GrowVec exclusively owns its allocation and has no interior
// mutability; references to elements only exist through &self / &mut self
unsafe impl<T: Send> Send for GrowVec<T> {}
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> GrowVec<T> {
    /// Creates an empty vector with the [`GrowthPolicy::DoublingAmortized`]
    /// policy and no allocation.
    pub fn new() -> Self {
        const {
            assert!(size_of::<T>() != 0, "GrowVec does not support zero-sized element types")
        };

        Self {
            buf: RawBuf::dangling(),
            len: 0,
            policy: GrowthPolicy::DoublingAmortized,
        }
    }

    /// Creates an empty vector with the [`GrowthPolicy::DoublingAmortized`]
    /// policy and the specified initial capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        Self::with_policy(GrowthPolicy::DoublingAmortized, capacity)
    }

    /// Creates an empty vector with the specified policy and initial
    /// capacity.
    ///
    /// A capacity of 0 allocates nothing. An allocation failure is reported
    /// as [`GrowVecError::AllocationFailure`] rather than proceeding with an
    /// invalid buffer.
    pub fn with_policy(policy: GrowthPolicy, capacity: usize) -> Result<Self, GrowVecError> {
        const {
            assert!(size_of::<T>() != 0, "GrowVec does not support zero-sized element types")
        };

        Ok(Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
            policy,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of element slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the capacity-management policy this vector was created with.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Makes room for one more element according to the policy.
    ///
    /// ExactFit reallocates to exactly `len + 1` on every call. Doubling
    /// grows to `max(1, capacity * 2)` when the push would fill the last
    /// free slot, so the buffer always keeps headroom and N pushes perform
    /// only O(log N) reallocations.
    fn reserve_for_push(&mut self) -> Result<(), GrowVecError> {
        match self.policy {
            GrowthPolicy::ExactFit => self.buf.resize(self.len + 1),
            GrowthPolicy::DoublingAmortized => {
                if self.len + 1 < self.buf.capacity() {
                    return Ok(());
                }

                let doubled = self.buf.capacity().checked_mul(2).ok_or(
                    GrowVecError::AllocationFailure {
                        requested: usize::MAX,
                    },
                )?;

                self.buf.resize(cmp::max(1, doubled))
            }
        }
    }

    /// Appends `value` at index `len`.
    ///
    /// On an allocation failure during growth the vector is left unchanged
    /// and the value is dropped with the error.
    pub fn push_back(&mut self, value: T) -> Result<(), GrowVecError> {
        self.reserve_for_push()?;

        // SAFETY (PRECONDITIONS ARE MET): reserve_for_push guarantees
        // capacity > len, so slot len is allocated and unoccupied
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Under [`GrowthPolicy::ExactFit`] the allocation shrinks to the new
    /// length; under [`GrowthPolicy::DoublingAmortized`] the capacity is
    /// left unchanged, so popping never reallocates.
    pub fn pop_back(&mut self) -> Result<T, GrowVecError> {
        if self.len == 0 {
            return Err(GrowVecError::EmptyArray);
        }

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slot len held a live element and
        // is now excluded from the live range, so ownership moves out
        let value = unsafe { self.buf.as_ptr().add(self.len).read() };

        if self.policy == GrowthPolicy::ExactFit {
            // Shrinking cannot fail observably; a refused shrink keeps the
            // larger allocation
            self.buf.resize(self.len)?;
        }

        Ok(value)
    }

    /// Removes and returns the first element, moving every remaining element
    /// down one slot. O(n).
    ///
    /// The allocation shrinks to exactly the new length under either policy.
    pub fn shift_front(&mut self) -> Result<T, GrowVecError> {
        if self.len == 0 {
            return Err(GrowVecError::EmptyArray);
        }

        let ptr = self.buf.as_ptr();
        // SAFETY (PRECONDITIONS ARE MET): len >= 1, so slot 0 is live;
        // the copy below overwrites it before it is reachable again
        let value = unsafe { ptr.read() };

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slots [1, len + 1) are live;
        // the ranges overlap and ptr::copy permits that
        unsafe { core::ptr::copy(ptr.add(1), ptr, self.len) };

        self.buf.resize(self.len)?;

        Ok(value)
    }

    /// Inserts `value` at index 0, moving every existing element up one
    /// slot. O(n).
    ///
    /// The allocation is resized to exactly `len + 1` regardless of policy.
    pub fn unshift_front(&mut self, value: T) -> Result<(), GrowVecError> {
        self.buf.resize(self.len + 1)?;

        let ptr = self.buf.as_ptr();
        // SAFETY (PRECONDITIONS ARE MET): capacity is at least len + 1, so
        // the shifted range stays in bounds; ptr::copy permits the overlap
        // and slot 0 is written only after its element has been moved up
        unsafe {
            core::ptr::copy(ptr, ptr.add(1), self.len);
            ptr.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, GrowVecError> {
        self.as_slice()
            .get(index)
            .ok_or(GrowVecError::IndexOutOfRange {
                index,
                length: self.len,
            })
    }

    /// Overwrites the element at `index`, dropping the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), GrowVecError> {
        let length = self.len;
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(GrowVecError::IndexOutOfRange { index, length })?;

        *slot = value;

        Ok(())
    }

    /// Returns an iterator over the live elements, left to right.
    ///
    /// Re-iterating without an intervening mutation yields the same
    /// sequence.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a slice of the live elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): the first len slots are
        // initialized; for len == 0 the dangling pointer is aligned and
        // non-null, which is all an empty slice requires
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): same as as_slice, and &mut self
        // guarantees exclusive access
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the live prefix is initialized and
        // dropped exactly once here; RawBuf releases the allocation afterwards
        unsafe { core::ptr::drop_in_place(self.as_mut_slice() as *mut [T]) };
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        // Equality compares live elements only, not policy or capacity
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("policy", &self.policy)
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders the live elements as `[10, 20, 30]`; an empty vector renders as
/// `[]`.
impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }

        f.write_str("]")
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
