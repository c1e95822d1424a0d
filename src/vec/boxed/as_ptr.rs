// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Returns a raw pointer to the start of the storage block.
    ///
    /// The pointer is null iff [`capacity`](GrowVec::capacity) is `0`. It stays
    /// the same across `push`, `pop`, and `clear` until the next growth step.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_deref().map_or(ptr::null(), <[T]>::as_ptr)
    }

    /// Returns a mutable raw pointer to the start of the storage block.
    ///
    /// The pointer is null iff [`capacity`](GrowVec::capacity) is `0`. Writes
    /// past `len` do not update `len` and are not visible through the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf
            .as_deref_mut()
            .map_or(ptr::null_mut(), <[T]>::as_mut_ptr)
    }
}
