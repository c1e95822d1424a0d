// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // The block itself is released by `Box`; only the live prefix needs dropping.
        self.clear();
    }
}
