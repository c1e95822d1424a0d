// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Returns a raw pointer to the start of the storage block.
    ///
    /// The pointer is null iff [`capacity`](GrowVec::capacity) is `0`. Only the
    /// first `len` elements are initialized; code that dereferences the
    /// pointer must not read from `ptr.add(i)` for any `i >= len`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf
            .as_deref()
            .map_or(ptr::null(), |block| block.as_ptr().cast::<T>())
    }

    /// Returns a mutable raw pointer to the start of the storage block.
    ///
    /// The pointer is null iff [`capacity`](GrowVec::capacity) is `0`. Writes
    /// past `len` do not update `len` and are never dropped by the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf
            .as_deref_mut()
            .map_or(ptr::null_mut(), |block| block.as_mut_ptr().cast::<T>())
    }
}
