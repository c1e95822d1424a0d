// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{block::try_alloc_block, GrowVec},
};

impl<T: Default> GrowVec<T> {
    /// Appends `value`, growing the block first if `len == capacity`.
    ///
    /// Returns [`Error::AllocFailed`] if growth cannot allocate; the vector is
    /// left unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let len = self.len;
        if len == self.capacity() {
            self.grow()?;
        }
        self.slots_mut()[len] = value;
        self.len = len + 1;
        Ok(())
    }

    /// Reallocates to the next capacity and moves the live prefix across.
    fn grow(&mut self) -> Result<(), Error> {
        let mut block = try_alloc_block(self.next_capacity()?, T::default)?;
        let len = self.len;
        // Swapping leaves defaults behind in the old block, which is dropped below.
        block[..len].swap_with_slice(&mut self.slots_mut()[..len]);
        self.buf = Some(block);
        Ok(())
    }
}
