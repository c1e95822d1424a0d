// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::mem;

impl<T: Default> GrowVec<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot is reset to `T::default()`. Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let len = self.len;
            Some(mem::take(&mut self.slots_mut()[len]))
        }
    }
}
