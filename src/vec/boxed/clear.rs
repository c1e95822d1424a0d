// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T: Default> GrowVec<T> {
    /// Drops every live element and sets `len = 0`. The block is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.as_mut_slice().fill_with(T::default);
        self.len = 0;
    }
}
