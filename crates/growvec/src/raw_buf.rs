// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuf - Owner of the backing allocation.
//!
//! Knows only the pointer and the slot count it was allocated with. Element
//! liveness is tracked by `GrowVec`; this layer never reads or drops elements.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, realloc};

use crate::error::GrowVecError;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// An empty buffer with no allocation behind it.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer of exactly `capacity` slots (0 allocates nothing).
    pub(crate) fn allocate(capacity: usize) -> Result<Self, GrowVecError> {
        let mut buf = Self::dangling();
        buf.resize(capacity)?;

        Ok(buf)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout(capacity: usize) -> Result<Layout, GrowVecError> {
        Layout::array::<T>(capacity)
            .map_err(|_| GrowVecError::AllocationFailure { requested: capacity })
    }

    /// Reallocates to exactly `new_capacity` slots, growing or shrinking.
    ///
    /// The live prefix is preserved: `realloc` copies the contents to the new
    /// location when it relocates. A failed grow leaves the old allocation
    /// untouched and returns `AllocationFailure`; a refused shrink keeps the
    /// larger allocation, which remains valid.
    pub(crate) fn resize(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        if new_capacity == self.capacity {
            return Ok(());
        }

        if new_capacity == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Self::layout(new_capacity)?;

        let raw = if self.capacity == 0 {
            // SAFETY (PRECONDITIONS ARE MET): new_layout has non-zero size
            // (new_capacity > 0 and T is not zero-sized)
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Self::layout(self.capacity)?;
            // SAFETY (PRECONDITIONS ARE MET): ptr was allocated with
            // old_layout and new_layout.size() is non-zero and fits isize
            unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.capacity = new_capacity;
                Ok(())
            }
            // Refused shrink: the old, larger block is still owned and valid
            None if new_capacity < self.capacity => Ok(()),
            None => Err(GrowVecError::AllocationFailure {
                requested: new_capacity,
            }),
        }
    }

    fn release(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // The layout was computed successfully when this block was allocated
        let Ok(layout) = Layout::array::<T>(self.capacity) else {
            return;
        };

        // SAFETY (PRECONDITIONS ARE MET): ptr was allocated with this layout
        // and has not been released yet
        unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };

        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
