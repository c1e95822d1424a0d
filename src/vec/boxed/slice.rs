// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Returns the live prefix as a shared slice (`&self.buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots()[..self.len]
    }

    /// Returns the live prefix as a mutable slice (`&mut self.buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.slots_mut()[..len]
    }

    /// Every slot of the block, live or not. Empty when there is no block.
    #[inline]
    pub(crate) fn slots(&self) -> &[T] {
        self.buf.as_deref().unwrap_or_default()
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        self.buf.as_deref_mut().unwrap_or_default()
    }
}
