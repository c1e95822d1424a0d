// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Drops every live element and sets `len = 0`. The block is kept.
    #[inline]
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Shrink first so a panicking destructor cannot lead to a double drop.
        self.len = 0;
        // SAFETY: `live` covers the previously initialized prefix, which is no
        // longer reachable through the vector.
        unsafe { ptr::drop_in_place(live) }
    }
}
