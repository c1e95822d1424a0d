// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let len = self.len;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[len]` still holds a `T`. It is now
            // outside the live prefix, so it is read exactly once here and never
            // dropped by the vector.
            Some(unsafe { self.slots_mut()[len].assume_init_read() })
        }
    }
}
